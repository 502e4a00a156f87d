//! Per-region category breakdown of the processed table.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::records::ProcessedVideoRow;

/// One `(region, category)` cell of the breakdown, repeated with the
/// region's dominant category so the file can be read without grouping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionCategorySummary {
    pub region: String,
    pub category_name: String,
    pub count: u64,
    /// `count / region total`, rounded to four decimal places.
    pub share: f64,
    pub top_category: String,
    pub top_share: f64,
}

impl RegionCategorySummary {
    pub const COLUMNS: &'static [&'static str] = &[
        "region",
        "category_name",
        "count",
        "share",
        "top_category",
        "top_share",
    ];
}

/// Counts rows per category within each region. Rows are unique per
/// `(region, video_id)`, so this is a count of distinct videos.
///
/// Output is sorted by region, then count descending, then category name.
/// The top category of a region is the first entry in that order.
#[must_use]
pub fn summarize_region_categories(rows: &[ProcessedVideoRow]) -> Vec<RegionCategorySummary> {
    let mut by_region: BTreeMap<&str, BTreeMap<&str, u64>> = BTreeMap::new();
    for row in rows {
        *by_region
            .entry(row.region.as_str())
            .or_default()
            .entry(row.category_name.as_str())
            .or_default() += 1;
    }

    let mut out = Vec::new();
    for (region, counts) in by_region {
        let total: u64 = counts.values().sum();
        let mut ordered: Vec<(&str, u64)> = counts.into_iter().collect();
        ordered.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        let Some(&(top_category, top_count)) = ordered.first() else {
            continue;
        };
        let top_share = share(top_count, total);

        out.extend(ordered.into_iter().map(|(category, count)| RegionCategorySummary {
            region: region.to_string(),
            category_name: category.to_string(),
            count,
            share: share(count, total),
            top_category: top_category.to_string(),
            top_share,
        }));
    }
    out
}

#[allow(clippy::cast_precision_loss)]
fn share(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    ((count as f64 / total as f64) * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::duration::DurationCategory;

    fn row(region: &str, category: &str) -> ProcessedVideoRow {
        ProcessedVideoRow {
            region: region.to_string(),
            video_id: "v".to_string(),
            title: None,
            channel_title: None,
            published_at: None,
            view_count: None,
            like_count: None,
            comment_count: None,
            duration: None,
            description: None,
            category_id: None,
            duration_seconds: None,
            duration_category: DurationCategory::Unknown,
            category_name: category.to_string(),
            continent: "Unknown".to_string(),
            country_name: "Unknown".to_string(),
        }
    }

    #[test]
    fn empty_input_yields_empty_summary() {
        assert!(summarize_region_categories(&[]).is_empty());
    }

    #[test]
    fn counts_and_shares_per_region() {
        let rows = vec![
            row("US", "Music"),
            row("US", "Gaming"),
            row("US", "Music"),
            row("GB", "Sports"),
        ];
        let summary = summarize_region_categories(&rows);

        assert_eq!(summary.len(), 3);
        assert_eq!(summary[0].region, "GB");
        assert_eq!(summary[0].count, 1);
        assert!((summary[0].share - 1.0).abs() < f64::EPSILON);

        assert_eq!(summary[1].region, "US");
        assert_eq!(summary[1].category_name, "Music");
        assert_eq!(summary[1].count, 2);
        assert!((summary[1].share - 0.6667).abs() < 1e-9);
        assert_eq!(summary[1].top_category, "Music");

        assert_eq!(summary[2].category_name, "Gaming");
        assert!((summary[2].share - 0.3333).abs() < 1e-9);
        assert_eq!(summary[2].top_category, "Music");
        assert!((summary[2].top_share - 0.6667).abs() < 1e-9);
    }

    #[test]
    fn ties_break_by_category_name() {
        let rows = vec![row("US", "Music"), row("US", "Comedy")];
        let summary = summarize_region_categories(&rows);
        assert_eq!(summary[0].category_name, "Comedy");
        assert_eq!(summary[0].top_category, "Comedy");
        assert_eq!(summary[1].category_name, "Music");
    }
}
