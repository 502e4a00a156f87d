//! Flattens API video resources into raw artifact rows.

use trendscope_core::RawVideoRow;

use crate::types::VideoItem;

/// Maps one `videos.list` item to a [`RawVideoRow`] tagged with `region`.
///
/// Absent parts and fields stay `None`; nothing is coerced here. Blank
/// strings are treated as absent.
#[must_use]
pub fn to_raw_row(region: &str, item: VideoItem) -> RawVideoRow {
    let snippet = item.snippet.unwrap_or_default();
    let statistics = item.statistics.unwrap_or_default();
    let content_details = item.content_details.unwrap_or_default();

    RawVideoRow {
        region: region.to_string(),
        video_id: item.id,
        title: non_blank(snippet.title),
        channel_title: non_blank(snippet.channel_title),
        published_at: non_blank(snippet.published_at),
        view_count: non_blank(statistics.view_count),
        like_count: non_blank(statistics.like_count),
        comment_count: non_blank(statistics.comment_count),
        duration: non_blank(content_details.duration),
        description: non_blank(snippet.description),
        category_id: non_blank(snippet.category_id),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(json: serde_json::Value) -> VideoItem {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn maps_all_fields() {
        let row = to_raw_row(
            "US",
            item(serde_json::json!({
                "id": "abc123",
                "snippet": {
                    "publishedAt": "2025-03-01T14:05:00Z",
                    "title": "A video",
                    "description": "About things",
                    "channelTitle": "A channel",
                    "categoryId": "10"
                },
                "statistics": { "viewCount": "1000", "likeCount": "50", "commentCount": "7" },
                "contentDetails": { "duration": "PT4M13S" }
            })),
        );

        assert_eq!(row.region, "US");
        assert_eq!(row.video_id, "abc123");
        assert_eq!(row.title.as_deref(), Some("A video"));
        assert_eq!(row.channel_title.as_deref(), Some("A channel"));
        assert_eq!(row.published_at.as_deref(), Some("2025-03-01T14:05:00Z"));
        assert_eq!(row.view_count.as_deref(), Some("1000"));
        assert_eq!(row.like_count.as_deref(), Some("50"));
        assert_eq!(row.comment_count.as_deref(), Some("7"));
        assert_eq!(row.duration.as_deref(), Some("PT4M13S"));
        assert_eq!(row.description.as_deref(), Some("About things"));
        assert_eq!(row.category_id.as_deref(), Some("10"));
    }

    #[test]
    fn hidden_likes_and_missing_parts_stay_absent() {
        let row = to_raw_row(
            "JP",
            item(serde_json::json!({
                "id": "xyz",
                "statistics": { "viewCount": "12" }
            })),
        );

        assert_eq!(row.view_count.as_deref(), Some("12"));
        assert!(row.like_count.is_none());
        assert!(row.comment_count.is_none());
        assert!(row.title.is_none());
        assert!(row.duration.is_none());
        assert!(row.category_id.is_none());
    }

    #[test]
    fn blank_strings_become_none() {
        let row = to_raw_row(
            "GB",
            item(serde_json::json!({
                "id": "v",
                "snippet": { "description": "  ", "title": "" }
            })),
        );
        assert!(row.description.is_none());
        assert!(row.title.is_none());
    }
}
