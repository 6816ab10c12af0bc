//! Implements the `VideoProvider` trait on top of the YouTube Data API v3.
//! Every request carries the configured API key and is bounded by the configured timeout.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use super::{PlaylistPage, VideoItem, VideoProvider};
use crate::config::ResolverConfig;
use crate::error::{ResolverError, ResolverResult};

/// Response of `playlistItems.list` (only the fields we read).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaylistItemsResponse {
    #[serde(default)]
    items: Vec<PlaylistItem>,
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PlaylistItem {
    snippet: PlaylistItemSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaylistItemSnippet {
    resource_id: ResourceId,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResourceId {
    video_id: Option<String>,
}

/// Response of `videos.list`.
#[derive(Debug, Deserialize)]
struct VideoListResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

/// Response of `search.list`.
#[derive(Debug, Deserialize)]
struct SearchListResponse {
    #[serde(default)]
    items: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    id: ResourceId,
}

/// Google's error envelope: `{"error": {"code": 403, "message": "..."}}`.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// HTTP client for the YouTube Data API.
pub struct YoutubeDataApi {
    client: Client,
    config: ResolverConfig,
}

impl YoutubeDataApi {
    /// Builds a client whose requests time out after `config.request_timeout`.
    pub fn new(config: ResolverConfig) -> ResolverResult<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self { client, config })
    }

    /// Sends a GET to `resource` with the given query plus the API key and decodes the JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        resource: &str,
        query: &[(&str, &str)],
    ) -> ResolverResult<T> {
        let response = self
            .client
            .get(self.config.endpoint(resource))
            .query(query)
            .query(&[("key", self.config.api_key.as_str())])
            .header("Accept", "application/json")
            .send()
            .await?;

        let body = Self::check_status(response).await?.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Converts a non-2xx response into `ResolverError::Api`, keeping the provider's message.
    async fn check_status(response: Response) -> ResolverResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response
            .text()
            .await
            .unwrap_or_else(|_| "Cannot read response".to_string());

        let message = serde_json::from_str::<ErrorEnvelope>(&text)
            .map(|envelope| envelope.error.message)
            .unwrap_or(text);

        Err(ResolverError::Api { status, message })
    }
}

#[async_trait]
impl VideoProvider for YoutubeDataApi {
    async fn list_playlist_items(
        &self,
        playlist_id: &str,
        page_token: Option<String>,
        max_results: u32,
    ) -> ResolverResult<PlaylistPage> {
        info!("Listing playlist {} (page token: {:?})", playlist_id, page_token);

        let max_results = max_results.to_string();
        let mut query = vec![
            ("part", "snippet"),
            ("playlistId", playlist_id),
            ("maxResults", max_results.as_str()),
        ];
        if let Some(token) = page_token.as_deref() {
            query.push(("pageToken", token));
        }

        let response: PlaylistItemsResponse = self.get_json("playlistItems", &query).await?;

        let video_ids: Vec<String> = response
            .items
            .into_iter()
            .filter_map(|item| item.snippet.resource_id.video_id)
            .collect();

        debug!(
            "Playlist {} page returned {} videos, next page: {}",
            playlist_id,
            video_ids.len(),
            response.next_page_token.is_some()
        );

        Ok(PlaylistPage {
            video_ids,
            next_page_token: response.next_page_token,
        })
    }

    async fn list_videos(&self, ids: Vec<String>) -> ResolverResult<Vec<VideoItem>> {
        info!("Looking up metadata for {} videos", ids.len());

        let joined = ids.join(",");
        let response: VideoListResponse = self
            .get_json("videos", &[("part", "snippet,contentDetails"), ("id", joined.as_str())])
            .await?;

        debug!(
            "Video lookup returned {} of {} requested items",
            response.items.len(),
            ids.len()
        );

        Ok(response.items)
    }

    async fn search_videos(&self, query: &str, max_results: u32) -> ResolverResult<Vec<String>> {
        info!("Searching videos for: {}", query);

        let max_results = max_results.to_string();
        let response: SearchListResponse = self
            .get_json(
                "search",
                &[
                    ("part", "snippet"),
                    ("q", query),
                    ("type", "video"),
                    ("safeSearch", "none"),
                    ("maxResults", max_results.as_str()),
                ],
            )
            .await?;

        Ok(response
            .items
            .into_iter()
            .filter_map(|result| result.id.video_id)
            .collect())
    }
}
