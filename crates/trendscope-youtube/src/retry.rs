//! Retry with exponential back-off and jitter for the YouTube client.
//!
//! [`retry_with_backoff`] wraps any fallible async operation and retries on
//! transient errors (network failures, 5xx, per-user rate limits). Quota
//! exhaustion and client errors are returned immediately; the caller marks
//! the region failed and moves on.

use std::future::Future;
use std::time::Duration;

use crate::error::YoutubeError;

/// Returns `true` for errors that are worth retrying after a back-off delay.
///
/// **Retriable:**
/// - Network-level failures: timeout, connection refused/reset.
/// - HTTP 5xx and 429 responses.
/// - `rateLimitExceeded` / `userRateLimitExceeded` / `backendError` reasons,
///   which YouTube reports with a 403 or 500.
///
/// **Not retriable:**
/// - [`YoutubeError::QuotaExceeded`]: resets daily; stop immediately.
/// - Other 4xx API errors (invalid region, bad key): retrying won't fix them.
/// - [`YoutubeError::Deserialize`], [`YoutubeError::PaginationLimit`],
///   [`YoutubeError::InvalidBaseUrl`].
pub(crate) fn is_retriable(err: &YoutubeError) -> bool {
    match err {
        YoutubeError::Http(e) => {
            e.is_timeout() || e.is_connect() || e.status().is_some_and(|s| s.is_server_error())
        }
        YoutubeError::Api { status, reason, .. } => {
            *status >= 500
                || *status == 429
                || matches!(
                    reason.as_str(),
                    "rateLimitExceeded" | "userRateLimitExceeded" | "backendError"
                )
        }
        YoutubeError::QuotaExceeded(_)
        | YoutubeError::Deserialize { .. }
        | YoutubeError::PaginationLimit { .. }
        | YoutubeError::InvalidBaseUrl { .. } => false,
    }
}

/// Runs `operation` with up to `max_retries` additional attempts on transient errors.
///
/// Back-off schedule with `backoff_base_ms = 1_000`:
///
/// | Attempt | Sleep before next attempt        |
/// |---------|----------------------------------|
/// | 1       | 1 000 ms × 2⁰ ± 25 % jitter     |
/// | 2       | 1 000 ms × 2¹ ± 25 % jitter     |
/// | 3       | 1 000 ms × 2² ± 25 % jitter     |
///
/// Delay is capped at 60 s. Non-retriable errors are returned immediately.
/// `context` names the request in retry logs, e.g. `videos.list(regionCode=US)`.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    context: &str,
    max_retries: u32,
    backoff_base_ms: u64,
    mut operation: F,
) -> Result<T, YoutubeError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, YoutubeError>>,
{
    const MAX_DELAY_MS: u64 = 60_000;
    let mut attempt = 0u32;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !is_retriable(&err) || attempt >= max_retries {
                    return Err(err);
                }
                attempt += 1;
                let computed = backoff_base_ms.saturating_mul(1u64 << (attempt - 1).min(10));
                let capped = computed.min(MAX_DELAY_MS);
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    clippy::cast_precision_loss
                )]
                let delay_ms = (capped as f64 * (rand::random::<f64>() * 0.5 + 0.75)) as u64;
                tracing::warn!(
                    request = context,
                    attempt,
                    max_retries,
                    delay_ms,
                    error = %err,
                    "transient provider error, retrying after back-off"
                );
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    use super::*;

    fn api_error(status: u16, reason: &str) -> YoutubeError {
        YoutubeError::Api {
            status,
            reason: reason.to_owned(),
            message: "test".to_owned(),
        }
    }

    #[test]
    fn quota_exceeded_is_not_retriable() {
        assert!(!is_retriable(&YoutubeError::QuotaExceeded(
            "daily limit".to_owned()
        )));
    }

    #[test]
    fn client_errors_are_not_retriable() {
        assert!(!is_retriable(&api_error(400, "invalidRegionCode")));
        assert!(!is_retriable(&api_error(403, "forbidden")));
        assert!(!is_retriable(&api_error(404, "videoChartNotFound")));
    }

    #[test]
    fn server_errors_and_rate_limits_are_retriable() {
        assert!(is_retriable(&api_error(500, "unknown")));
        assert!(is_retriable(&api_error(503, "unknown")));
        assert!(is_retriable(&api_error(429, "unknown")));
        assert!(is_retriable(&api_error(403, "rateLimitExceeded")));
    }

    #[test]
    fn deserialize_error_is_not_retriable() {
        let src = serde_json::from_str::<()>("invalid").unwrap_err();
        assert!(!is_retriable(&YoutubeError::Deserialize {
            context: "test".to_owned(),
            source: src,
        }));
    }

    #[tokio::test]
    async fn succeeds_immediately_on_first_try() {
        let calls = Arc::new(AtomicU32::new(0));
        let c = Arc::clone(&calls);
        let result = retry_with_backoff("videos.list(regionCode=US)", 3, 0, || {
            let c = Arc::clone(&c);
            async move {
                c.fetch_add(1, Ordering::SeqCst);
                Ok::<u32, YoutubeError>(42)
            }
        })
        .await;
        assert_eq!(result.unwrap(), 42);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn does_not_retry_quota_exceeded() {
        let calls = Arc::new(AtomicU32::new(0));
        let c = Arc::clone(&calls);
        let result = retry_with_backoff("videos.list(regionCode=US)", 3, 0, || {
            let c = Arc::clone(&c);
            async move {
                c.fetch_add(1, Ordering::SeqCst);
                Err::<u32, _>(YoutubeError::QuotaExceeded("Daily Limit".to_owned()))
            }
        })
        .await;
        assert_eq!(
            calls.load(Ordering::SeqCst),
            1,
            "QuotaExceeded must not be retried"
        );
        assert!(matches!(result, Err(YoutubeError::QuotaExceeded(_))));
    }

    #[tokio::test]
    async fn retries_then_succeeds() {
        let calls = Arc::new(AtomicU32::new(0));
        let c = Arc::clone(&calls);
        let result = retry_with_backoff("videos.list(regionCode=US)", 3, 0, || {
            let c = Arc::clone(&c);
            async move {
                let attempt = c.fetch_add(1, Ordering::SeqCst) + 1;
                if attempt < 3 {
                    Err::<u32, _>(api_error(503, "backendError"))
                } else {
                    Ok(99)
                }
            }
        })
        .await;
        assert_eq!(result.unwrap(), 99, "should succeed after retries");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn gives_up_after_max_retries() {
        let calls = Arc::new(AtomicU32::new(0));
        let c = Arc::clone(&calls);
        let result = retry_with_backoff("videos.list(regionCode=US)", 2, 0, || {
            let c = Arc::clone(&c);
            async move {
                c.fetch_add(1, Ordering::SeqCst);
                Err::<u32, _>(api_error(500, "backendError"))
            }
        })
        .await;
        assert_eq!(
            calls.load(Ordering::SeqCst),
            3,
            "one initial attempt plus two retries"
        );
        assert!(matches!(result, Err(YoutubeError::Api { status: 500, .. })));
    }
}
