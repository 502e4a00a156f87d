//! End-of-run summary printed to stdout.

use std::fmt::Write as _;

use trendscope_core::TransformReport;

use crate::collect::CollectReport;

/// What a `collect`, `transform`, or `run` invocation did. Either half may be
/// absent depending on the command.
#[derive(Debug, Default)]
pub(crate) struct RunSummary<'a> {
    pub collect: Option<&'a CollectReport>,
    pub transform: Option<&'a TransformReport>,
}

impl RunSummary<'_> {
    pub(crate) fn render(&self) -> String {
        let mut out = String::new();

        if let Some(collect) = self.collect {
            let _ = writeln!(out, "rows collected: {}", collect.rows.len());
            for (region, rows) in &collect.rows_per_region {
                let _ = writeln!(out, "  {region:<4}{rows:>6}");
            }
            if collect.duplicates_removed > 0 {
                let _ = writeln!(out, "duplicates removed: {}", collect.duplicates_removed);
            }
            if collect.failed_regions.is_empty() {
                let _ = writeln!(out, "failed regions: none");
            } else {
                let _ = writeln!(out, "failed regions: {}", collect.failed_regions.len());
                for (region, reason) in &collect.failed_regions {
                    let _ = writeln!(out, "  {region}: {reason}");
                }
            }
        }

        if let Some(report) = self.transform {
            let _ = writeln!(out, "rows processed: {}", report.output_rows);
            let _ = writeln!(
                out,
                "rows dropped: {} (missing video id: {}, missing region: {})",
                report.dropped_rows(),
                report.dropped_missing_video_id,
                report.dropped_missing_region
            );
            let _ = writeln!(
                out,
                "nulled fields: {} durations, {} timestamps, {} counts",
                report.malformed_durations, report.malformed_timestamps, report.malformed_counts
            );
            let _ = writeln!(
                out,
                "unresolved: {} categories, {} continents",
                report.unknown_categories, report.unknown_continents
            );
        }

        out
    }

    pub(crate) fn print(&self) {
        print!("{}", self.render());
    }
}
