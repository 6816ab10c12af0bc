//! Provider response bodies in the YouTube Data API v3 shape.

use serde_json::{Value, json};

/// Sample video id used across tests.
pub const SAMPLE_VIDEO_ID: &str = "dQw4w9WgXcQ";

/// Sample playlist id used across tests.
pub const SAMPLE_PLAYLIST_ID: &str = "PLrAXtmErZgOeiKm4sgNOknGvNjby9efdf";

/// Deterministic 11-character id for the n-th playlist member.
pub fn member_id(n: usize) -> String {
    format!("member{:05}", n)
}

pub fn video_json(id: &str, title: &str, duration: &str) -> Value {
    json!({
        "kind": "youtube#video",
        "id": id,
        "snippet": {
            "title": title,
            "thumbnails": {
                "default": {"url": format!("https://i.ytimg.com/vi/{}/default.jpg", id), "width": 120, "height": 90},
                "medium": {"url": format!("https://i.ytimg.com/vi/{}/mqdefault.jpg", id), "width": 320, "height": 180},
                "high": {"url": format!("https://i.ytimg.com/vi/{}/hqdefault.jpg", id), "width": 480, "height": 360}
            }
        },
        "contentDetails": {"duration": duration}
    })
}

pub fn video_list_json(items: Vec<Value>) -> Value {
    json!({"kind": "youtube#videoListResponse", "items": items})
}

pub fn playlist_page_json(video_ids: &[String], next_page_token: Option<&str>) -> Value {
    let items: Vec<Value> = video_ids
        .iter()
        .map(|id| json!({"snippet": {"resourceId": {"kind": "youtube#video", "videoId": id}}}))
        .collect();

    let mut body = json!({"kind": "youtube#playlistItemListResponse", "items": items});
    if let Some(token) = next_page_token {
        body["nextPageToken"] = json!(token);
    }
    body
}

pub fn search_json(video_ids: &[&str]) -> Value {
    let items: Vec<Value> = video_ids
        .iter()
        .map(|id| json!({"id": {"kind": "youtube#video", "videoId": id}}))
        .collect();

    json!({"kind": "youtube#searchListResponse", "items": items})
}
