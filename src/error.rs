//! Error types shared by the provider client and the resolver.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while resolving songs through the metadata provider.
///
/// "Nothing found" is never an error: lookups that cannot be resolved return
/// `Ok(None)` or an empty `Vec` instead.
#[derive(Error, Debug)]
pub enum ResolverError {
    /// Transport failure, timeout, or an undecodable response body.
    #[error("API communication failure: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with a non-2xx status (bad key, quota exhausted, ...).
    #[error("Provider rejected request ({status}): {message}")]
    Api { status: StatusCode, message: String },

    /// The provider answered 2xx but the body did not have the expected shape.
    #[error("Unable to parse response: {0}")]
    Json(#[from] serde_json::Error),

    /// A configuration value could not be used.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for resolver and provider operations.
pub type ResolverResult<T> = Result<T, ResolverError>;
