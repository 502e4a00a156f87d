//! Region-by-region collection from the trending chart.
//!
//! A failing region is logged, recorded in the report, and contributes zero
//! rows. Collection itself never fails on provider errors; callers decide
//! what an all-failed report means after the artifacts are written.

use futures::stream::{self, StreamExt};
use trendscope_core::{dedupe_by_video_id, AppConfig, CategoryMap, RawVideoRow};
use trendscope_youtube::{to_raw_row, VideoCategory, YoutubeClient};

/// Outcome of one collection pass.
#[derive(Debug, Default)]
pub(crate) struct CollectReport {
    /// Rows in region order, then chart rank order.
    pub rows: Vec<RawVideoRow>,
    /// Rows kept per successful region, in configured region order.
    pub rows_per_region: Vec<(String, usize)>,
    /// `(region, reason)` for every region that yielded nothing.
    pub failed_regions: Vec<(String, String)>,
    pub duplicates_removed: usize,
}

impl CollectReport {
    /// `true` when at least one region was attempted and none succeeded.
    pub(crate) fn all_regions_failed(&self) -> bool {
        self.rows_per_region.is_empty() && !self.failed_regions.is_empty()
    }

    /// Comma-separated failed region codes, e.g. `ZZ, XX`.
    pub(crate) fn failed_region_codes(&self) -> String {
        self.failed_regions
            .iter()
            .map(|(region, _)| region.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Builds the provider client from configuration.
///
/// # Errors
///
/// Returns an error if no API key is configured or the client cannot be built.
pub(crate) fn build_youtube_client(config: &AppConfig) -> anyhow::Result<YoutubeClient> {
    let api_key = config.require_api_key()?;
    YoutubeClient::with_base_url(
        api_key,
        &config.youtube_api_base_url,
        config.request_timeout_secs,
        &config.user_agent,
        config.max_retries,
        config.retry_backoff_base_ms,
    )
    .map_err(|e| anyhow::anyhow!("failed to build YouTube client: {e}"))
}

/// Fetches up to `per_region_limit` trending videos for every region.
///
/// Regions are fetched `max_concurrent` at a time; results are merged in
/// configured order once all fetches finish. Provider errors are recorded
/// per region in the returned report, including when every region fails.
pub(crate) async fn collect(
    client: &YoutubeClient,
    regions: &[String],
    per_region_limit: u32,
    inter_request_delay_ms: u64,
    max_concurrent: usize,
) -> CollectReport {
    let max_concurrent = max_concurrent.max(1);

    let results: Vec<_> = stream::iter(regions)
        .enumerate()
        .map(|(index, region)| async move {
            // Courtesy pause between region requests when running serially.
            if index > 0 && max_concurrent == 1 && inter_request_delay_ms > 0 {
                tokio::time::sleep(std::time::Duration::from_millis(inter_request_delay_ms)).await;
            }
            let result = client
                .fetch_trending(region, per_region_limit, inter_request_delay_ms)
                .await;
            (region, result)
        })
        .buffered(max_concurrent)
        .collect()
        .await;

    let mut report = CollectReport::default();
    for (region, result) in results {
        match result {
            Ok(fetched) => {
                let rows: Vec<RawVideoRow> = fetched
                    .items
                    .into_iter()
                    .map(|item| to_raw_row(region, item))
                    .collect();
                let (rows, dropped) = dedupe_by_video_id(rows);
                let dropped = dropped + fetched.duplicates_skipped;
                if dropped > 0 {
                    tracing::debug!(region = %region, dropped, "removed duplicate video ids");
                }
                tracing::info!(region = %region, rows = rows.len(), "collected region");
                report.duplicates_removed += dropped;
                report.rows_per_region.push((region.clone(), rows.len()));
                report.rows.extend(rows);
            }
            Err(e) => {
                tracing::warn!(region = %region, error = %e, "region failed, skipping");
                report.failed_regions.push((region.clone(), e.to_string()));
            }
        }
    }

    if !report.failed_regions.is_empty() {
        tracing::warn!(
            failed_regions = report.failed_regions.len(),
            total_regions = regions.len(),
            "some regions failed during collection"
        );
    }

    report
}

/// Starts from the standard category table and fills in ids it lacks with
/// the titles the provider reports for `regions`. The first title seen for
/// an id wins; regions whose lookup fails are skipped.
pub(crate) async fn build_category_map(client: &YoutubeClient, regions: &[String]) -> CategoryMap {
    let mut map = CategoryMap::standard();
    for region in regions {
        match client.fetch_video_categories(region).await {
            Ok(categories) => {
                let added =
                    map.merge_missing(categories.into_iter().filter_map(VideoCategory::into_pair));
                tracing::debug!(region = %region, added, "merged provider categories");
            }
            Err(e) => {
                tracing::warn!(region = %region, error = %e, "category lookup failed, skipping");
            }
        }
    }
    tracing::info!(categories = map.len(), "category map ready");
    map
}

#[cfg(test)]
#[path = "collect_test.rs"]
mod tests;
