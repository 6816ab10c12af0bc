//! Mock provider endpoints mounted on a `wiremock` server.

use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

use super::TEST_API_KEY;
use super::fixtures::{member_id, playlist_page_json, video_json, video_list_json};

const PAGE_SIZE: usize = 50;

/// Answers `videos.list` with one item per requested id, in request order.
pub struct EchoVideos;

impl Respond for EchoVideos {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let ids = request
            .url
            .query_pairs()
            .find(|(key, _)| key == "id")
            .map(|(_, value)| value.into_owned())
            .unwrap_or_default();

        let items = ids
            .split(',')
            .filter(|id| !id.is_empty())
            .map(|id| video_json(id, &format!("Song {}", id), "PT3M30S"))
            .collect();

        ResponseTemplate::new(200).set_body_json(video_list_json(items))
    }
}

/// Mounts `videos.list`, expecting exactly `calls` requests.
pub async fn mount_videos(server: &MockServer, calls: u64) {
    Mock::given(method("GET"))
        .and(path("/videos"))
        .and(query_param("part", "snippet,contentDetails"))
        .and(query_param("key", TEST_API_KEY))
        .respond_with(EchoVideos)
        .expect(calls)
        .mount(server)
        .await;
}

/// Mounts a playlist of `len` members served in pages of 50, each page expected exactly once.
/// Returns the number of pages.
pub async fn mount_playlist(server: &MockServer, playlist_id: &str, len: usize) -> usize {
    let pages = len.div_ceil(PAGE_SIZE).max(1);

    for page in 0..pages {
        let start = page * PAGE_SIZE;
        let end = (start + PAGE_SIZE).min(len);
        let ids: Vec<String> = (start..end).map(member_id).collect();
        let next_token = format!("token-{}", page + 1);
        let next = (end < len).then_some(next_token.as_str());

        let mock = Mock::given(method("GET"))
            .and(path("/playlistItems"))
            .and(query_param("playlistId", playlist_id))
            .and(query_param("maxResults", "50"))
            .and(query_param("key", TEST_API_KEY));

        let mock = if page == 0 {
            mock.and(query_param_is_missing("pageToken"))
        } else {
            mock.and(query_param("pageToken", format!("token-{}", page)))
        };

        mock.respond_with(ResponseTemplate::new(200).set_body_json(playlist_page_json(&ids, next)))
            .expect(1)
            .mount(server)
            .await;
    }

    pages
}
