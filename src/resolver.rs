//! Resolves user input (video links, playlist links, search keywords) into `Song`s.
//!
//! The resolver is stateless apart from its provider and URL prefix, so a
//! single instance can be shared between tasks. All provider queries issued by
//! one call run strictly one after another.

use tracing::{debug, info};

use crate::config::ResolverConfig;
use crate::error::ResolverResult;
use crate::provider::youtube::YoutubeDataApi;
use crate::provider::{MAX_RESULTS_PER_PAGE, VideoProvider};
use crate::song::Song;
use crate::utils::url_id::{extract_playlist_id, extract_video_id, is_playlist_url};

/// Position in a paginated playlist listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageCursor {
    /// Start from the first page.
    First,
    /// Continue with an opaque provider token.
    Next(String),
    /// No more pages.
    Exhausted,
}

impl PageCursor {
    /// Turns the provider's continuation token into a cursor. Absent or empty tokens end the listing.
    pub fn from_token(token: Option<String>) -> Self {
        match token {
            Some(token) if !token.is_empty() => Self::Next(token),
            _ => Self::Exhausted,
        }
    }
}

/// Outcome of [`MetadataResolver::resolve_input`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    /// The input was a playlist link.
    Playlist(Vec<Song>),
    /// The input was treated as a single video reference.
    Single(Option<Song>),
}

impl Resolved {
    /// Flattens either shape into a list of songs.
    pub fn into_songs(self) -> Vec<Song> {
        match self {
            Resolved::Playlist(songs) => songs,
            Resolved::Single(song) => song.into_iter().collect(),
        }
    }
}

/// Turns URLs, playlist links and keywords into songs using a [`VideoProvider`].
pub struct MetadataResolver<P = YoutubeDataApi> {
    provider: P,
    watch_url_prefix: String,
}

impl MetadataResolver<YoutubeDataApi> {
    /// Creates a resolver backed by the YouTube Data API.
    pub fn from_config(config: ResolverConfig) -> ResolverResult<Self> {
        let watch_url_prefix = config.watch_url_prefix.clone();
        Ok(Self::new(YoutubeDataApi::new(config)?, watch_url_prefix))
    }
}

impl<P: VideoProvider> MetadataResolver<P> {
    /// Creates a resolver over any [`VideoProvider`].
    ///
    /// # Arguments
    ///
    /// * `provider` - The provider queried for playlists, videos and searches.
    /// * `watch_url_prefix` - Prefix the video id is appended to when building `Song::url`.
    pub fn new(provider: P, watch_url_prefix: impl Into<String>) -> Self {
        Self {
            provider,
            watch_url_prefix: watch_url_prefix.into(),
        }
    }

    /// Dispatches on the input: playlist links resolve to every member, anything else to one video.
    pub async fn resolve_input(&self, input: &str) -> ResolverResult<Resolved> {
        if is_playlist_url(input) {
            return match extract_playlist_id(input) {
                Some(playlist_id) => Ok(Resolved::Playlist(self.fetch_playlist(&playlist_id).await?)),
                None => {
                    debug!("Playlist link without an id: {}", input);
                    Ok(Resolved::Playlist(Vec::new()))
                }
            };
        }

        Ok(Resolved::Single(self.fetch_by_url(input).await?))
    }

    /// Same as [`resolve_input`](Self::resolve_input), flattened into a list.
    pub async fn resolve_songs(&self, input: &str) -> ResolverResult<Vec<Song>> {
        Ok(self.resolve_input(input).await?.into_songs())
    }

    /// Fetches every song of a playlist in playlist order.
    pub async fn fetch_playlist(&self, playlist_id: &str) -> ResolverResult<Vec<Song>> {
        self.fetch_playlist_from(playlist_id, PageCursor::First).await
    }

    /// Fetches a playlist starting at `cursor`.
    ///
    /// An exhausted cursor, or a `Next` cursor with an empty token, returns
    /// nothing without a query. A failure on any page discards the pages
    /// already fetched.
    ///
    /// # Arguments
    ///
    /// * `playlist_id` - The playlist to list.
    /// * `cursor` - Where to start; [`PageCursor::First`] for the whole playlist.
    ///
    /// # Returns
    ///
    /// The songs from `cursor` to the end of the playlist, in playlist order.
    pub async fn fetch_playlist_from(
        &self,
        playlist_id: &str,
        mut cursor: PageCursor,
    ) -> ResolverResult<Vec<Song>> {
        info!("Fetching playlist {}", playlist_id);
        let mut songs = Vec::new();

        loop {
            let page_token = match cursor {
                PageCursor::Exhausted => break,
                // An empty token is end-of-listing, never a request for the first page.
                PageCursor::Next(token) if token.is_empty() => break,
                PageCursor::First => None,
                PageCursor::Next(token) => Some(token),
            };

            let page = self
                .provider
                .list_playlist_items(playlist_id, page_token, MAX_RESULTS_PER_PAGE)
                .await?;

            songs.extend(self.fetch_by_ids(&page.video_ids).await?);
            cursor = PageCursor::from_token(page.next_page_token);
        }

        info!("Playlist {} resolved to {} songs", playlist_id, songs.len());
        Ok(songs)
    }

    /// Fetches metadata for the given ids, one query per 50 ids.
    ///
    /// Songs come back in provider order; ids the provider cannot resolve are skipped.
    pub async fn fetch_by_ids(&self, ids: &[String]) -> ResolverResult<Vec<Song>> {
        let mut songs = Vec::with_capacity(ids.len());

        for chunk in ids.chunks(MAX_RESULTS_PER_PAGE as usize) {
            let items = self.provider.list_videos(chunk.to_vec()).await?;
            debug!("Resolved {} of {} ids", items.len(), chunk.len());

            songs.extend(
                items
                    .into_iter()
                    .map(|item| Song::from_video(item, &self.watch_url_prefix)),
            );
        }

        Ok(songs)
    }

    /// Resolves a single video URL. Returns `None` if no id can be extracted or the video is gone.
    pub async fn fetch_by_url(&self, url: &str) -> ResolverResult<Option<Song>> {
        let Some(video_id) = extract_video_id(url) else {
            debug!("No video id in input: {}", url);
            return Ok(None);
        };

        info!("Fetching song metadata for video {}", video_id);
        Ok(self.fetch_by_ids(&[video_id]).await?.into_iter().next())
    }

    /// Searches for `keyword` and resolves the top result, if any.
    pub async fn search_top_match(&self, keyword: &str) -> ResolverResult<Option<Song>> {
        info!("Searching top match for: {}", keyword);

        let ids = self.provider.search_videos(keyword, 1).await?;
        let Some(video_id) = ids.into_iter().next() else {
            debug!("No search results for: {}", keyword);
            return Ok(None);
        };

        Ok(self.fetch_by_ids(&[video_id]).await?.into_iter().next())
    }
}
