//! Defines the `Song` struct, the normalized record handed to the playback queue.

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use crate::provider::VideoItem;
use crate::utils::timestamp::{DurationError, parse_iso8601_duration};

/// Normalized metadata for one playable video.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Song {
    /// Display title.
    pub title: String,
    /// Canonical watch URL.
    pub url: String,
    /// ISO-8601 duration exactly as the provider reported it.
    pub duration: String,
    /// Medium-resolution thumbnail URL, empty when the provider has none.
    pub thumbnail_url: String,
}

impl Song {
    /// Creates a song from already-normalized fields.
    ///
    /// # Arguments
    ///
    /// * `title` - Display title.
    /// * `url` - Canonical watch URL.
    /// * `duration` - ISO-8601 duration string, stored as given.
    /// * `thumbnail_url` - Thumbnail URL, or an empty string.
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        duration: impl Into<String>,
        thumbnail_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            duration: duration.into(),
            thumbnail_url: thumbnail_url.into(),
        }
    }

    /// Builds a song from a provider video record. The URL is `watch_url_prefix` followed by the video id.
    pub fn from_video(item: VideoItem, watch_url_prefix: &str) -> Self {
        let thumbnail_url = item
            .snippet
            .thumbnails
            .medium_url()
            .unwrap_or_default()
            .to_string();

        Self {
            title: item.snippet.title,
            url: format!("{}{}", watch_url_prefix, item.id),
            duration: item.content_details.duration,
            thumbnail_url,
        }
    }

    /// Parses the stored duration string.
    pub fn parsed_duration(&self) -> Result<TimeDelta, DurationError> {
        parse_iso8601_duration(&self.duration)
    }
}
