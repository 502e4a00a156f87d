//! Raw rows → processed rows.
//!
//! Every per-field failure is a [`ParseError`] that nulls the field and is
//! counted in the [`TransformReport`]; a row is only dropped when it lacks an
//! identifying field (video id or region).

use chrono::{DateTime, NaiveDateTime};

use crate::categories::CategoryMap;
use crate::duration::{parse_iso8601_duration, DurationCategory};
use crate::records::{ProcessedVideoRow, RawVideoRow};
use crate::regions::{continent_for_region, country_name};
use crate::ParseError;

/// Processed rows plus an audit of what the transformer dropped or nulled.
#[derive(Debug, Clone)]
pub struct TransformOutput {
    pub rows: Vec<ProcessedVideoRow>,
    pub report: TransformReport,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformReport {
    pub input_rows: usize,
    pub output_rows: usize,
    pub dropped_missing_video_id: usize,
    pub dropped_missing_region: usize,
    pub malformed_durations: usize,
    pub malformed_timestamps: usize,
    pub malformed_counts: usize,
    pub unknown_categories: usize,
    pub unknown_continents: usize,
}

impl TransformReport {
    #[must_use]
    pub fn dropped_rows(&self) -> usize {
        self.dropped_missing_video_id + self.dropped_missing_region
    }
}

/// Transforms raw rows using the built-in category table.
#[must_use]
pub fn transform(raw: &[RawVideoRow]) -> TransformOutput {
    transform_with_categories(raw, &CategoryMap::standard())
}

/// Transforms raw rows, resolving category names through `categories`.
///
/// Row order is preserved.
#[must_use]
pub fn transform_with_categories(raw: &[RawVideoRow], categories: &CategoryMap) -> TransformOutput {
    let mut report = TransformReport {
        input_rows: raw.len(),
        ..TransformReport::default()
    };
    let mut rows = Vec::with_capacity(raw.len());

    for row in raw {
        let video_id = row.video_id.trim();
        let region = row.region.trim().to_ascii_uppercase();
        if video_id.is_empty() {
            report.dropped_missing_video_id += 1;
            tracing::debug!(region = %region, "dropping row without a video id");
            continue;
        }
        if region.is_empty() {
            report.dropped_missing_region += 1;
            tracing::debug!(video_id, "dropping row without a region");
            continue;
        }

        rows.push(process_row(row, video_id, region, categories, &mut report));
    }

    report.output_rows = rows.len();
    TransformOutput { rows, report }
}

fn process_row(
    row: &RawVideoRow,
    video_id: &str,
    region: String,
    categories: &CategoryMap,
    report: &mut TransformReport,
) -> ProcessedVideoRow {
    let duration_seconds = row.duration.as_deref().and_then(|raw| {
        parse_iso8601_duration(raw)
            .map_err(|e| {
                report.malformed_durations += 1;
                tracing::debug!(video_id, error = %e, "nulling duration");
            })
            .ok()
    });

    let published_at = row.published_at.as_deref().and_then(|raw| {
        parse_published_at(raw)
            .map_err(|e| {
                report.malformed_timestamps += 1;
                tracing::debug!(video_id, error = %e, "nulling published_at");
            })
            .ok()
    });

    let mut count = |field: &'static str, raw: Option<&str>| -> Option<u64> {
        raw.and_then(|raw| {
            parse_count(field, raw)
                .map_err(|e| {
                    report.malformed_counts += 1;
                    tracing::debug!(video_id, error = %e, "nulling count");
                })
                .ok()
        })
    };
    let view_count = count("view_count", row.view_count.as_deref());
    let like_count = count("like_count", row.like_count.as_deref());
    let comment_count = count("comment_count", row.comment_count.as_deref());

    let category_name = categories.resolve(row.category_id.as_deref()).to_string();
    if category_name == crate::UNKNOWN {
        report.unknown_categories += 1;
    }
    let continent = continent_for_region(&region).to_string();
    if continent == crate::UNKNOWN {
        report.unknown_continents += 1;
    }
    let country_name = country_name(&region).to_string();

    ProcessedVideoRow {
        video_id: video_id.to_string(),
        title: row.title.clone(),
        channel_title: row.channel_title.clone(),
        published_at,
        view_count,
        like_count,
        comment_count,
        duration: row.duration.clone(),
        description: row.description.clone(),
        category_id: row.category_id.clone(),
        duration_seconds,
        duration_category: DurationCategory::from_seconds(duration_seconds),
        category_name,
        continent,
        country_name,
        region,
    }
}

/// Parses an RFC 3339 timestamp into a timezone-naive UTC value.
///
/// # Errors
///
/// Returns [`ParseError::Timestamp`] if `raw` is not RFC 3339.
pub fn parse_published_at(raw: &str) -> Result<NaiveDateTime, ParseError> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|dt| dt.naive_utc())
        .map_err(|e| ParseError::Timestamp {
            raw: raw.to_string(),
            reason: e.to_string(),
        })
}

/// Parses a provider statistic (a non-negative decimal string).
///
/// # Errors
///
/// Returns [`ParseError::Count`] if `raw` is not a non-negative integer.
pub fn parse_count(field: &'static str, raw: &str) -> Result<u64, ParseError> {
    raw.trim().parse::<u64>().map_err(|_| ParseError::Count {
        field,
        raw: raw.to_string(),
    })
}

#[cfg(test)]
#[path = "transform_test.rs"]
mod tests;
