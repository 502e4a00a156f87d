pub mod app_config;
pub mod categories;
pub mod config;
pub mod duration;
pub mod records;
pub mod region_summary;
pub mod regions;
pub mod transform;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use categories::CategoryMap;
pub use config::{load_app_config, load_app_config_from_env, parse_region_list};
pub use duration::{bucket_duration, parse_iso8601_duration, DurationCategory};
pub use records::{dedupe_by_video_id, ProcessedVideoRow, RawVideoRow};
pub use region_summary::{summarize_region_categories, RegionCategorySummary};
pub use regions::{continent_for_region, country_name, WORLD_REGIONS};
pub use transform::{transform, transform_with_categories, TransformOutput, TransformReport};

/// Sentinel used for category, continent, and country names that have no
/// entry in the static lookup tables.
pub const UNKNOWN: &str = "Unknown";

/// Fatal configuration problems. A run never starts when one of these is
/// returned.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("region list is empty")]
    EmptyRegionList,

    #[error("invalid region code \"{0}\": expected two ASCII letters")]
    InvalidRegionCode(String),

    #[error("invalid output path \"{path}\": {reason}")]
    InvalidOutputPath { path: String, reason: String },
}

/// A single field that could not be coerced into its target type. These are
/// never fatal: the transformer nulls the field and counts the failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed duration \"{raw}\": {reason}")]
    Duration { raw: String, reason: &'static str },

    #[error("malformed timestamp \"{raw}\": {reason}")]
    Timestamp { raw: String, reason: String },

    #[error("malformed {field} \"{raw}\"")]
    Count { field: &'static str, raw: String },
}
