//! The metadata provider seam and the wire types it exchanges.
//!
//! [`VideoProvider`] covers the three query shapes the resolver needs:
//! playlist membership pages, batched video lookups and keyword search.
//! [`youtube::YoutubeDataApi`] implements it over HTTP.

/// Implementation of `VideoProvider` backed by the YouTube Data API v3.
pub mod youtube;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ResolverResult;

/// Maximum number of results (or ids) the provider accepts per request.
pub const MAX_RESULTS_PER_PAGE: u32 = 50;

/// One page of playlist membership.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaylistPage {
    /// Member video ids in playlist order.
    pub video_ids: Vec<String>,
    /// Continuation token, absent on the last page.
    pub next_page_token: Option<String>,
}

/// A video record as returned by a batched lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoItem {
    pub id: String,
    pub snippet: VideoSnippet,
    pub content_details: VideoContentDetails,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoSnippet {
    pub title: String,
    #[serde(default)]
    pub thumbnails: Thumbnails,
}

/// Thumbnail variants. Any of them may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thumbnails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Thumbnail>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<Thumbnail>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high: Option<Thumbnail>,
}

impl Thumbnails {
    /// URL of the medium thumbnail, falling back to `high` and then `default`.
    pub fn medium_url(&self) -> Option<&str> {
        self.medium
            .as_ref()
            .or(self.high.as_ref())
            .or(self.default.as_ref())
            .map(|t| t.url.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thumbnail {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoContentDetails {
    /// ISO-8601 duration, e.g. `PT4M13S`.
    pub duration: String,
}

/// Defines the queries the resolver issues against a metadata provider.
/// Requires `Send + Sync` so a resolver can be shared across tasks.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VideoProvider: Send + Sync {
    /// Lists one page of a playlist's members. `page_token` is `None` for the first page.
    async fn list_playlist_items(
        &self,
        playlist_id: &str,
        page_token: Option<String>,
        max_results: u32,
    ) -> ResolverResult<PlaylistPage>;

    /// Looks up at most [`MAX_RESULTS_PER_PAGE`] videos in one request.
    /// Ids the provider no longer knows are left out of the result.
    async fn list_videos(&self, ids: Vec<String>) -> ResolverResult<Vec<VideoItem>>;

    /// Searches videos by keyword with safe-search disabled, returning matching video ids.
    async fn search_videos(&self, query: &str, max_results: u32) -> ResolverResult<Vec<String>>;
}
