//! YouTube Data API v3 response types.
//!
//! Only the fields the pipeline reads are modelled. Everything is optional
//! except the video id: the API omits `likeCount` when likes are hidden and
//! `commentCount` when comments are disabled, and omits parts entirely when
//! they were not requested.
//!
//! Statistics arrive as decimal strings (`"viewCount": "1234"`) and are kept
//! that way; coercion happens in the transformer.

use serde::Deserialize;

/// Response of `videos.list`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<VideoItem>,
    #[serde(default)]
    pub next_page_token: Option<String>,
    #[serde(default)]
    pub page_info: Option<PageInfo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    #[serde(default)]
    pub total_results: Option<u32>,
    #[serde(default)]
    pub results_per_page: Option<u32>,
}

/// A single video resource.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoItem {
    pub id: String,
    #[serde(default)]
    pub snippet: Option<VideoSnippet>,
    #[serde(default)]
    pub statistics: Option<VideoStatistics>,
    #[serde(default)]
    pub content_details: Option<ContentDetails>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSnippet {
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub channel_title: Option<String>,
    #[serde(default)]
    pub category_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatistics {
    #[serde(default)]
    pub view_count: Option<String>,
    #[serde(default)]
    pub like_count: Option<String>,
    #[serde(default)]
    pub comment_count: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentDetails {
    /// ISO 8601 duration, e.g. `"PT4M13S"`.
    #[serde(default)]
    pub duration: Option<String>,
}

/// Response of `videoCategories.list`.
#[derive(Debug, Deserialize)]
pub struct VideoCategoryListResponse {
    #[serde(default)]
    pub items: Vec<VideoCategory>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideoCategory {
    pub id: String,
    #[serde(default)]
    pub snippet: Option<VideoCategorySnippet>,
}

impl VideoCategory {
    /// Returns `(id, title)` when the category carries a non-empty title.
    #[must_use]
    pub fn into_pair(self) -> Option<(String, String)> {
        let title = self.snippet?.title?;
        if title.trim().is_empty() {
            return None;
        }
        Some((self.id, title))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideoCategorySnippet {
    #[serde(default)]
    pub title: Option<String>,
}

/// Body of a non-2xx response:
/// `{"error": {"code": 403, "message": "...", "errors": [{"reason": "quotaExceeded"}]}}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Vec<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorDetail {
    #[serde(default)]
    pub reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_full_video_item() {
        let json = serde_json::json!({
            "kind": "youtube#video",
            "id": "dQw4w9WgXcQ",
            "snippet": {
                "publishedAt": "2025-03-01T14:05:00Z",
                "channelId": "UC123",
                "title": "A video",
                "description": "About things",
                "channelTitle": "A channel",
                "categoryId": "10"
            },
            "contentDetails": { "duration": "PT4M13S", "dimension": "2d" },
            "statistics": { "viewCount": "1000", "likeCount": "50", "favoriteCount": "0", "commentCount": "7" }
        });
        let item: VideoItem = serde_json::from_value(json).unwrap();
        assert_eq!(item.id, "dQw4w9WgXcQ");
        let snippet = item.snippet.unwrap();
        assert_eq!(snippet.category_id.as_deref(), Some("10"));
        assert_eq!(snippet.channel_title.as_deref(), Some("A channel"));
        let stats = item.statistics.unwrap();
        assert_eq!(stats.like_count.as_deref(), Some("50"));
        assert_eq!(
            item.content_details.unwrap().duration.as_deref(),
            Some("PT4M13S")
        );
    }

    #[test]
    fn hidden_likes_and_missing_parts_are_none() {
        let json = serde_json::json!({
            "id": "abc",
            "statistics": { "viewCount": "12" }
        });
        let item: VideoItem = serde_json::from_value(json).unwrap();
        assert!(item.snippet.is_none());
        assert!(item.content_details.is_none());
        let stats = item.statistics.unwrap();
        assert!(stats.like_count.is_none());
        assert!(stats.comment_count.is_none());
    }

    #[test]
    fn list_response_without_items_or_token() {
        let resp: VideoListResponse =
            serde_json::from_value(serde_json::json!({"kind": "youtube#videoListResponse"}))
                .unwrap();
        assert!(resp.items.is_empty());
        assert!(resp.next_page_token.is_none());
    }

    #[test]
    fn category_into_pair_requires_title() {
        let with_title: VideoCategory =
            serde_json::from_value(serde_json::json!({"id": "1", "snippet": {"title": "Film & Animation"}}))
                .unwrap();
        assert_eq!(
            with_title.into_pair(),
            Some(("1".to_string(), "Film & Animation".to_string()))
        );

        let without: VideoCategory =
            serde_json::from_value(serde_json::json!({"id": "2"})).unwrap();
        assert_eq!(without.into_pair(), None);
    }
}
