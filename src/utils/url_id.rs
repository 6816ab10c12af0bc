//! Extraction of video and playlist identifiers from user input.

use regex::Regex;
use std::sync::LazyLock;

/// Length of every YouTube video id.
pub const VIDEO_ID_LEN: usize = 11;

/// Substring marking a playlist link.
pub const PLAYLIST_MARKER: &str = "/playlist?list=";

/// Regex to match the common video URL shapes (`youtu.be/`, `v/`, `/u/x/`, `embed/`, `watch?v=`).
/// The candidate id is capture group 7.
static VIDEO_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^.*((youtu.be/)|(v/)|(/u/\w/)|(embed/)|(watch\?))\??v?=?([^#&?]*).*").unwrap()
});

/// Extracts the 11-character video id from a YouTube URL.
///
/// Returns `None` when the input matches no known shape or when the captured
/// candidate does not have the expected length.
pub fn extract_video_id(input: &str) -> Option<String> {
    VIDEO_URL_REGEX
        .captures(input)
        .and_then(|cap| cap.get(7))
        .map(|m| m.as_str())
        .filter(|id| id.chars().count() == VIDEO_ID_LEN)
        .map(|id| id.to_string())
}

/// Checks if the input is a playlist link.
pub fn is_playlist_url(input: &str) -> bool {
    input.contains(PLAYLIST_MARKER)
}

/// Extracts the playlist id: the text after [`PLAYLIST_MARKER`] up to the next `&`.
pub fn extract_playlist_id(input: &str) -> Option<String> {
    let (_, rest) = input.split_once(PLAYLIST_MARKER)?;
    let id = rest.split('&').next().unwrap_or_default();

    if id.is_empty() {
        None
    } else {
        Some(id.to_string())
    }
}
