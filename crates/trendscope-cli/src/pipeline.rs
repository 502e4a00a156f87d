//! Command handlers: wire configuration, the provider client, the pure
//! transform, and artifact IO together.

use std::path::{Path, PathBuf};

use trendscope_core::config::validate_output_path;
use trendscope_core::{
    parse_region_list, summarize_region_categories, transform_with_categories, AppConfig,
    CategoryMap, ProcessedVideoRow, RawVideoRow, RegionCategorySummary, TransformReport,
};

use crate::artifact::{read_raw, stage_csv, write_csv};
use crate::collect::{build_category_map, build_youtube_client, collect, CollectReport};
use crate::summary::RunSummary;

/// Command-line values that take precedence over the environment.
#[derive(Debug, Default)]
pub(crate) struct Overrides {
    pub regions: Option<String>,
    pub api_key: Option<String>,
    pub raw: Option<String>,
    pub out: Option<String>,
}

/// Applies `overrides` on top of the environment-derived `config`, with the
/// same validation the environment values get.
///
/// `--out` also moves the summary artifact: it is written next to the
/// processed file as `<stem>_summary.csv`.
///
/// # Errors
///
/// Returns the underlying `ConfigError` for an invalid region list or path.
pub(crate) fn apply_overrides(config: &mut AppConfig, overrides: Overrides) -> anyhow::Result<()> {
    if let Some(raw) = overrides.regions {
        config.regions = parse_region_list(&raw)?;
    }
    if let Some(key) = overrides.api_key.filter(|k| !k.trim().is_empty()) {
        config.youtube_api_key = Some(key);
    }
    if let Some(raw) = overrides.raw {
        config.raw_path = validate_output_path(&raw)?;
    }
    if let Some(out) = overrides.out {
        let processed = validate_output_path(&out)?;
        config.summary_path = summary_path_for(&processed);
        config.processed_path = processed;
    }
    Ok(())
}

/// `out/trending.csv` → `out/trending_summary.csv`.
fn summary_path_for(processed: &Path) -> PathBuf {
    let stem = processed
        .file_stem()
        .map_or_else(|| "processed".to_string(), |s| s.to_string_lossy().into_owned());
    processed.with_file_name(format!("{stem}_summary.csv"))
}

/// `trendscope collect`: fetch every region and overwrite the raw artifact.
///
/// The raw artifact is replaced even when every region fails (header only),
/// so a later `transform` never sees a previous run's rows.
///
/// # Errors
///
/// Returns an error naming the regions after the summary is printed when no
/// region succeeded, or immediately on configuration or IO failure.
pub(crate) async fn run_collect(config: &AppConfig) -> anyhow::Result<CollectReport> {
    let client = build_youtube_client(config)?;
    let report = collect_to_raw(&client, config).await?;
    RunSummary {
        collect: Some(&report),
        transform: None,
    }
    .print();
    ensure_some_region_succeeded(&report)?;
    Ok(report)
}

/// `trendscope transform`: regenerate the processed and summary artifacts
/// from the raw artifact on disk.
pub(crate) fn run_transform(config: &AppConfig) -> anyhow::Result<TransformReport> {
    let raw = read_raw(&config.raw_path)?;
    tracing::info!(rows = raw.len(), path = %config.raw_path.display(), "read raw artifact");
    let report = transform_to_artifacts(
        &raw,
        &CategoryMap::standard(),
        &config.processed_path,
        &config.summary_path,
    )?;
    RunSummary {
        collect: None,
        transform: Some(&report),
    }
    .print();
    Ok(report)
}

/// `trendscope run`: collect, then transform the freshly collected rows.
///
/// All three artifacts are regenerated even when every region fails; the
/// error naming the regions comes after the summary.
pub(crate) async fn run_all(
    config: &AppConfig,
    fetch_categories: bool,
) -> anyhow::Result<(CollectReport, TransformReport)> {
    let client = build_youtube_client(config)?;
    let collected = collect_to_raw(&client, config).await?;

    let categories = if fetch_categories && !collected.all_regions_failed() {
        build_category_map(&client, &config.regions).await
    } else {
        CategoryMap::standard()
    };

    let report = transform_to_artifacts(
        &collected.rows,
        &categories,
        &config.processed_path,
        &config.summary_path,
    )?;
    RunSummary {
        collect: Some(&collected),
        transform: Some(&report),
    }
    .print();
    ensure_some_region_succeeded(&collected)?;
    Ok((collected, report))
}

fn ensure_some_region_succeeded(report: &CollectReport) -> anyhow::Result<()> {
    if report.all_regions_failed() {
        anyhow::bail!(
            "all {} regions failed collection: {}",
            report.failed_regions.len(),
            report.failed_region_codes()
        );
    }
    Ok(())
}

async fn collect_to_raw(
    client: &trendscope_youtube::YoutubeClient,
    config: &AppConfig,
) -> anyhow::Result<CollectReport> {
    let report = collect(
        client,
        &config.regions,
        config.per_region_limit,
        config.inter_request_delay_ms,
        config.max_concurrent_regions,
    )
    .await;
    write_csv(&config.raw_path, RawVideoRow::COLUMNS, &report.rows)?;
    Ok(report)
}

fn transform_to_artifacts(
    raw: &[RawVideoRow],
    categories: &CategoryMap,
    processed_path: &Path,
    summary_path: &Path,
) -> anyhow::Result<TransformReport> {
    let output = transform_with_categories(raw, categories);
    let summary_rows = summarize_region_categories(&output.rows);

    // The pair must agree: stage both before replacing either.
    let processed = stage_csv(processed_path, ProcessedVideoRow::COLUMNS, &output.rows)?;
    let summary = stage_csv(summary_path, RegionCategorySummary::COLUMNS, &summary_rows)?;
    processed.commit()?;
    summary.commit()?;

    tracing::info!(
        input_rows = output.report.input_rows,
        output_rows = output.report.output_rows,
        dropped = output.report.dropped_rows(),
        "transform complete"
    );
    Ok(output.report)
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
