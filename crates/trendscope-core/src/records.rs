//! Row types for the raw and processed artifacts.
//!
//! Field order is the column order of the written files. Absent values are
//! `None` and serialize as empty cells so a disabled like count stays
//! distinguishable from a zero.

use std::collections::HashSet;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::duration::DurationCategory;

/// One trending video observation for one region, exactly as the provider
/// returned it. Statistics keep the provider's decimal-string encoding; the
/// transformer coerces them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawVideoRow {
    pub region: String,
    pub video_id: String,
    pub title: Option<String>,
    pub channel_title: Option<String>,
    /// RFC 3339 timestamp, e.g. `"2025-03-01T14:05:00Z"`.
    pub published_at: Option<String>,
    pub view_count: Option<String>,
    /// `None` when the uploader has hidden likes.
    pub like_count: Option<String>,
    /// `None` when comments are disabled.
    pub comment_count: Option<String>,
    /// ISO 8601 duration, e.g. `"PT4M13S"`.
    pub duration: Option<String>,
    pub description: Option<String>,
    pub category_id: Option<String>,
}

impl RawVideoRow {
    pub const COLUMNS: &'static [&'static str] = &[
        "region",
        "video_id",
        "title",
        "channel_title",
        "published_at",
        "view_count",
        "like_count",
        "comment_count",
        "duration",
        "description",
        "category_id",
    ];
}

/// An enriched, analysis-ready row.
///
/// Carries the raw columns (with timestamps and counts coerced) followed by
/// the derived columns. This column set is the contract with the
/// visualization layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedVideoRow {
    pub region: String,
    pub video_id: String,
    pub title: Option<String>,
    pub channel_title: Option<String>,
    /// UTC, timezone-naive.
    #[serde(with = "naive_timestamp")]
    pub published_at: Option<NaiveDateTime>,
    pub view_count: Option<u64>,
    pub like_count: Option<u64>,
    pub comment_count: Option<u64>,
    pub duration: Option<String>,
    pub description: Option<String>,
    pub category_id: Option<String>,
    pub duration_seconds: Option<u64>,
    pub duration_category: DurationCategory,
    pub category_name: String,
    pub continent: String,
    pub country_name: String,
}

impl ProcessedVideoRow {
    pub const COLUMNS: &'static [&'static str] = &[
        "region",
        "video_id",
        "title",
        "channel_title",
        "published_at",
        "view_count",
        "like_count",
        "comment_count",
        "duration",
        "description",
        "category_id",
        "duration_seconds",
        "duration_category",
        "category_name",
        "continent",
        "country_name",
    ];
}

/// Drops repeated video ids within one region's rows, keeping the first
/// (highest-ranked) occurrence. Returns the kept rows and the number dropped.
#[must_use]
pub fn dedupe_by_video_id(rows: Vec<RawVideoRow>) -> (Vec<RawVideoRow>, usize) {
    let mut seen: HashSet<(String, String)> = HashSet::with_capacity(rows.len());
    let before = rows.len();
    let kept: Vec<RawVideoRow> = rows
        .into_iter()
        .filter(|r| seen.insert((r.region.clone(), r.video_id.clone())))
        .collect();
    let dropped = before - kept.len();
    (kept, dropped)
}

/// `YYYY-MM-DD HH:MM:SS` in CSV cells, empty for `None`.
mod naive_timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ts) => serializer.serialize_str(&ts.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => NaiveDateTime::parse_from_str(s, FORMAT)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}
