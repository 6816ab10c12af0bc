//! Resolver configuration: API key, provider endpoint and request timeout.
//!
//! The configuration is an explicit value handed to
//! [`YoutubeDataApi::new`](crate::provider::youtube::YoutubeDataApi::new) and
//! lives for as long as the resolver does.

use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use crate::error::{ResolverError, ResolverResult};

/// Base URL of the YouTube Data API v3.
pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Prefix turned into a canonical watch URL by appending a video id.
pub const DEFAULT_WATCH_URL_PREFIX: &str = "https://www.youtube.com/watch?v=";

/// Per-request timeout used when none is configured.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings for talking to the metadata provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Static API key sent with every request. Not validated locally.
    #[serde(default)]
    pub api_key: String,
    /// Provider endpoint, without a trailing resource name.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Prefix for the canonical song URL.
    #[serde(default = "default_watch_url_prefix")]
    pub watch_url_prefix: String,
    /// Timeout applied to each outbound query.
    #[serde(default = "default_request_timeout", with = "humantime_serde")]
    pub request_timeout: Duration,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_watch_url_prefix() -> String {
    DEFAULT_WATCH_URL_PREFIX.to_string()
}

fn default_request_timeout() -> Duration {
    DEFAULT_REQUEST_TIMEOUT
}

impl ResolverConfig {
    /// Creates a configuration for the public YouTube endpoint with the given key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: default_base_url(),
            watch_url_prefix: default_watch_url_prefix(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Points the provider client at another endpoint (a proxy or a test server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Overrides the per-request timeout.
    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    /// Reads the configuration from the environment, loading `.env` first if present.
    ///
    /// | variable | default |
    /// |---|---|
    /// | `YT_API_KEY` | empty (requests will be rejected by the provider) |
    /// | `YT_API_BASE_URL` | [`DEFAULT_BASE_URL`] |
    /// | `YT_WATCH_URL_PREFIX` | [`DEFAULT_WATCH_URL_PREFIX`] |
    /// | `YT_REQUEST_TIMEOUT` | `10s`, humantime syntax |
    pub fn from_env() -> ResolverResult<Self> {
        dotenv::dotenv().ok();

        let api_key = env::var("YT_API_KEY").unwrap_or_else(|_| {
            warn!("YT_API_KEY environment variable not set. Provider requests will be rejected.");
            String::new()
        });

        let mut config = Self::new(api_key);

        if let Ok(base_url) = env::var("YT_API_BASE_URL") {
            debug!("Using provider base URL from environment: {}", base_url);
            config.base_url = base_url;
        }

        if let Ok(prefix) = env::var("YT_WATCH_URL_PREFIX") {
            config.watch_url_prefix = prefix;
        }

        if let Ok(timeout) = env::var("YT_REQUEST_TIMEOUT") {
            config.request_timeout = humantime_serde::re::humantime::parse_duration(&timeout)
                .map_err(|e| {
                    ResolverError::Config(format!("Invalid YT_REQUEST_TIMEOUT '{}': {}", timeout, e))
                })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Checks that the base URL is an absolute http(s) URL.
    pub fn validate(&self) -> ResolverResult<()> {
        let url = Url::parse(&self.base_url).map_err(|e| {
            ResolverError::Config(format!("Invalid base URL '{}': {}", self.base_url, e))
        })?;

        match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ResolverError::Config(format!(
                "Unsupported base URL scheme '{}'",
                scheme
            ))),
        }
    }

    /// Builds the full URL of a provider resource such as `videos`.
    pub(crate) fn endpoint(&self, resource: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), resource)
    }
}
