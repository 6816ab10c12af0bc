//! Resolves YouTube links, playlist links and search keywords into normalized
//! [`Song`] records for a music queue, and formats playback timestamps.
//!
//! ```no_run
//! # async fn run() -> Result<(), yt_metadata_resolver::ResolverError> {
//! use yt_metadata_resolver::{MetadataResolver, ResolverConfig};
//!
//! let resolver = MetadataResolver::from_config(ResolverConfig::from_env()?)?;
//! let songs = resolver
//!     .resolve_songs("https://www.youtube.com/playlist?list=PLrAXtmErZgOeiKm4sgNOknGvNjby9efdf")
//!     .await?;
//! # Ok(())
//! # }
//! ```

/// Provider endpoint, API key and timeout settings.
pub mod config;
/// Error types shared by the provider client and the resolver.
pub mod error;
/// The metadata provider trait and its YouTube Data API implementation.
pub mod provider;
/// Dispatching, pagination and batch resolution of songs.
pub mod resolver;
/// The normalized `Song` record.
pub mod song;
/// URL id extraction and timestamp formatting.
pub mod utils;

pub use config::ResolverConfig;
pub use error::{ResolverError, ResolverResult};
pub use provider::VideoProvider;
pub use provider::youtube::YoutubeDataApi;
pub use resolver::{MetadataResolver, PageCursor, Resolved};
pub use song::Song;
pub use utils::timestamp::{DurationError, format_timestamp, parse_iso8601_duration};
pub use utils::url_id::{extract_playlist_id, extract_video_id};
