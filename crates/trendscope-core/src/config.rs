use std::path::{Path, PathBuf};

use crate::app_config::{AppConfig, Environment};
use crate::regions::WORLD_REGIONS;
use crate::ConfigError;

/// The provider caps the trending chart at 200 entries per region.
pub const MAX_PER_REGION_LIMIT: u32 = 200;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let env = parse_environment(&or_default("TRENDSCOPE_ENV", "development"))?;
    let log_level = or_default("TRENDSCOPE_LOG_LEVEL", "info");

    let youtube_api_key = lookup("YOUTUBE_API_KEY")
        .ok()
        .filter(|k| !k.trim().is_empty());
    let youtube_api_base_url = or_default(
        "YOUTUBE_API_BASE_URL",
        "https://www.googleapis.com/youtube/v3/",
    );

    let regions = match lookup("TRENDSCOPE_REGIONS") {
        Ok(raw) => parse_region_list(&raw)?,
        Err(_) => parse_region_list(&WORLD_REGIONS.join(","))?,
    };

    let per_region_limit = parse_u32("TRENDSCOPE_PER_REGION_LIMIT", "50")?;
    if per_region_limit == 0 || per_region_limit > MAX_PER_REGION_LIMIT {
        return Err(ConfigError::InvalidEnvVar {
            var: "TRENDSCOPE_PER_REGION_LIMIT".to_string(),
            reason: format!("must be between 1 and {MAX_PER_REGION_LIMIT}"),
        });
    }

    let raw_path = validate_output_path(&or_default(
        "TRENDSCOPE_RAW_PATH",
        "data/youtube_trending_raw.csv",
    ))?;
    let processed_path = validate_output_path(&or_default(
        "TRENDSCOPE_PROCESSED_PATH",
        "data/youtube_trending_processed.csv",
    ))?;
    let summary_path = validate_output_path(&or_default(
        "TRENDSCOPE_SUMMARY_PATH",
        "data/youtube_region_category_summary.csv",
    ))?;

    let request_timeout_secs = parse_u64("TRENDSCOPE_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("TRENDSCOPE_USER_AGENT", "trendscope/0.1 (trending-collector)");
    let max_retries = parse_u32("TRENDSCOPE_MAX_RETRIES", "3")?;
    let retry_backoff_base_ms = parse_u64("TRENDSCOPE_RETRY_BACKOFF_BASE_MS", "1000")?;
    let inter_request_delay_ms = parse_u64("TRENDSCOPE_INTER_REQUEST_DELAY_MS", "100")?;
    let max_concurrent_regions = parse_usize("TRENDSCOPE_MAX_CONCURRENT_REGIONS", "1")?;

    Ok(AppConfig {
        env,
        log_level,
        youtube_api_key,
        youtube_api_base_url,
        regions,
        per_region_limit,
        raw_path,
        processed_path,
        summary_path,
        request_timeout_secs,
        user_agent,
        max_retries,
        retry_backoff_base_ms,
        inter_request_delay_ms,
        max_concurrent_regions,
    })
}

/// Parse a comma-separated region list.
///
/// Codes are trimmed and upper-cased; empty entries are ignored and repeats
/// are dropped, keeping the first position.
///
/// # Errors
///
/// - [`ConfigError::InvalidRegionCode`] if a code is not two ASCII letters.
/// - [`ConfigError::EmptyRegionList`] if no codes remain.
pub fn parse_region_list(raw: &str) -> Result<Vec<String>, ConfigError> {
    let mut regions: Vec<String> = Vec::new();
    for part in raw.split(',') {
        let code = part.trim().to_ascii_uppercase();
        if code.is_empty() {
            continue;
        }
        if code.len() != 2 || !code.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidRegionCode(part.trim().to_string()));
        }
        if !regions.contains(&code) {
            regions.push(code);
        }
    }
    if regions.is_empty() {
        return Err(ConfigError::EmptyRegionList);
    }
    Ok(regions)
}

/// Check that `raw` can name an output file.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidOutputPath`] if the path is blank, ends in a
/// separator, or names an existing directory.
pub fn validate_output_path(raw: &str) -> Result<PathBuf, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidOutputPath {
        path: raw.to_string(),
        reason: reason.to_string(),
    };

    if raw.trim().is_empty() {
        return Err(invalid("path is empty"));
    }
    if raw.ends_with('/') || raw.ends_with(std::path::MAIN_SEPARATOR) {
        return Err(invalid("path names a directory"));
    }
    let path = Path::new(raw);
    if path.is_dir() {
        return Err(invalid("path is an existing directory"));
    }
    Ok(path.to_path_buf())
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "TRENDSCOPE_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
