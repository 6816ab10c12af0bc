//! Pure helpers that never touch the network.

/// Parsing and formatting of ISO-8601 durations and playback timestamps.
pub mod timestamp;
/// Video and playlist id extraction from YouTube URLs.
pub mod url_id;
