use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub youtube_api_key: Option<String>,
    pub youtube_api_base_url: String,
    /// Upper-cased, de-duplicated region codes in configured order.
    pub regions: Vec<String>,
    pub per_region_limit: u32,
    pub raw_path: PathBuf,
    pub processed_path: PathBuf,
    pub summary_path: PathBuf,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub max_retries: u32,
    pub retry_backoff_base_ms: u64,
    pub inter_request_delay_ms: u64,
    pub max_concurrent_regions: usize,
}

impl AppConfig {
    /// Returns the API key, or the configuration error a collecting command
    /// should fail with when it is absent.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConfigError::MissingEnvVar`] for `YOUTUBE_API_KEY`.
    pub fn require_api_key(&self) -> Result<&str, crate::ConfigError> {
        self.youtube_api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| crate::ConfigError::MissingEnvVar("YOUTUBE_API_KEY".to_string()))
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field(
                "youtube_api_key",
                &self.youtube_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("youtube_api_base_url", &self.youtube_api_base_url)
            .field("regions", &self.regions.len())
            .field("per_region_limit", &self.per_region_limit)
            .field("raw_path", &self.raw_path)
            .field("processed_path", &self.processed_path)
            .field("summary_path", &self.summary_path)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("max_retries", &self.max_retries)
            .field("retry_backoff_base_ms", &self.retry_backoff_base_ms)
            .field("inter_request_delay_ms", &self.inter_request_delay_ms)
            .field("max_concurrent_regions", &self.max_concurrent_regions)
            .finish()
    }
}
