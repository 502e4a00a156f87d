use thiserror::Error;

use crate::types::ErrorEnvelope;

/// Errors returned by the YouTube API client.
#[derive(Debug, Error)]
pub enum YoutubeError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-2xx status and an error envelope.
    #[error("YouTube API error {status} ({reason}): {message}")]
    Api {
        status: u16,
        reason: String,
        message: String,
    },

    /// The project's daily quota is spent. Retrying before the quota resets
    /// only burns more requests.
    #[error("YouTube API quota exceeded: {0}")]
    QuotaExceeded(String),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("pagination limit reached for region {region}: exceeded {max_pages} pages")]
    PaginationLimit { region: String, max_pages: usize },

    #[error("invalid base URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl YoutubeError {
    /// Builds an error from a non-2xx response body.
    ///
    /// Falls back to the bare status when the body is not a YouTube error
    /// envelope (e.g. an HTML page from a proxy).
    pub(crate) fn from_error_body(status: u16, body: &str) -> Self {
        let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) else {
            return Self::Api {
                status,
                reason: "unknown".to_string(),
                message: truncate(body, 200),
            };
        };

        let reason = envelope
            .error
            .errors
            .first()
            .and_then(|e| e.reason.clone())
            .unwrap_or_else(|| "unknown".to_string());
        let message = envelope
            .error
            .message
            .unwrap_or_else(|| format!("HTTP {status}"));

        if matches!(reason.as_str(), "quotaExceeded" | "dailyLimitExceeded") {
            Self::QuotaExceeded(message)
        } else {
            Self::Api {
                status,
                reason,
                message,
            }
        }
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    let trimmed = s.trim();
    match trimmed.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}…", &trimmed[..idx]),
        None => trimmed.to_string(),
    }
}
