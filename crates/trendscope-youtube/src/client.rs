//! HTTP client for the YouTube Data API v3.
//!
//! Wraps `reqwest` with API key handling, typed response deserialization,
//! YouTube error-envelope decoding, and bounded retries on transient
//! failures.

use std::collections::HashSet;
use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::YoutubeError;
use crate::retry::retry_with_backoff;
use crate::types::{VideoCategory, VideoCategoryListResponse, VideoItem, VideoListResponse};

pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3/";

/// The API caps `maxResults` at 50 per page.
pub const MAX_RESULTS_PER_PAGE: u32 = 50;

/// Maximum pages fetched for one region before giving up. The trending chart
/// holds at most 200 entries, so a longer walk means the API is cycling
/// page tokens.
pub const MAX_PAGES: usize = 10;

const VIDEO_PARTS: &str = "snippet,statistics,contentDetails";

/// Distinct videos of one region's chart, in rank order.
#[derive(Debug, Default)]
pub struct TrendingVideos {
    pub items: Vec<VideoItem>,
    /// Items dropped because their id already appeared on an earlier page.
    pub duplicates_skipped: usize,
}

/// Client for the YouTube Data API v3.
///
/// Use [`YoutubeClient::new`] for production or
/// [`YoutubeClient::with_base_url`] to point at a mock server in tests.
pub struct YoutubeClient {
    client: Client,
    api_key: String,
    base_url: Url,
    max_retries: u32,
    backoff_base_ms: u64,
}

impl YoutubeClient {
    /// Creates a client pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`YoutubeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_ms: u64,
    ) -> Result<Self, YoutubeError> {
        Self::with_base_url(
            api_key,
            DEFAULT_BASE_URL,
            timeout_secs,
            user_agent,
            max_retries,
            backoff_base_ms,
        )
    }

    /// Creates a client with a custom base URL.
    ///
    /// # Errors
    ///
    /// Returns [`YoutubeError::Http`] if the `reqwest::Client` cannot be
    /// built, or [`YoutubeError::InvalidBaseUrl`] if `base_url` does not parse.
    pub fn with_base_url(
        api_key: &str,
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_ms: u64,
    ) -> Result<Self, YoutubeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash so `join("videos")` appends a segment
        // instead of replacing the last one.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| YoutubeError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url: parsed,
            max_retries,
            backoff_base_ms,
        })
    }

    /// Fetches one page of the `mostPopular` chart for `region`.
    ///
    /// `max_results` is clamped to `1..=50`.
    ///
    /// # Errors
    ///
    /// - [`YoutubeError::QuotaExceeded`] when the daily quota is spent.
    /// - [`YoutubeError::Api`] for other non-2xx responses (after retries
    ///   for transient statuses).
    /// - [`YoutubeError::Http`] on network failure after retries.
    /// - [`YoutubeError::Deserialize`] if the body has an unexpected shape.
    pub async fn fetch_trending_page(
        &self,
        region: &str,
        page_token: Option<&str>,
        max_results: u32,
    ) -> Result<VideoListResponse, YoutubeError> {
        let max_results = max_results.clamp(1, MAX_RESULTS_PER_PAGE).to_string();
        let mut params = vec![
            ("part", VIDEO_PARTS),
            ("chart", "mostPopular"),
            ("regionCode", region),
            ("maxResults", max_results.as_str()),
        ];
        if let Some(token) = page_token {
            params.push(("pageToken", token));
        }

        let url = self.build_url("videos", &params)?;
        let context = format!("videos.list(regionCode={region})");
        self.get_json(&url, &context).await
    }

    /// Fetches up to `limit` distinct trending videos for `region`, following
    /// page tokens until the limit is reached or the chart ends.
    ///
    /// A video id already seen on an earlier page is skipped and does not
    /// count toward `limit`, so overlapping pages trigger another request
    /// rather than a short result. `inter_request_delay_ms` is slept between
    /// pages (not before the first).
    ///
    /// All-or-nothing: a failure on any page discards earlier pages and
    /// returns the error.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Self::fetch_trending_page`]. Returns
    /// [`YoutubeError::PaginationLimit`] after [`MAX_PAGES`] pages.
    pub async fn fetch_trending(
        &self,
        region: &str,
        limit: u32,
        inter_request_delay_ms: u64,
    ) -> Result<TrendingVideos, YoutubeError> {
        let limit = limit as usize;
        let mut items: Vec<VideoItem> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        let mut duplicates_skipped = 0usize;
        let mut token: Option<String> = None;
        let mut page_count = 0usize;

        while items.len() < limit {
            page_count += 1;
            if page_count > MAX_PAGES {
                return Err(YoutubeError::PaginationLimit {
                    region: region.to_owned(),
                    max_pages: MAX_PAGES,
                });
            }
            if page_count > 1 && inter_request_delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(inter_request_delay_ms)).await;
            }

            let remaining = u32::try_from(limit - items.len()).unwrap_or(MAX_RESULTS_PER_PAGE);
            let page = self
                .fetch_trending_page(region, token.as_deref(), remaining)
                .await?;

            tracing::debug!(
                region,
                page = page_count,
                items = page.items.len(),
                has_next = page.next_page_token.is_some(),
                "fetched trending page"
            );

            let page_was_empty = page.items.is_empty();
            for item in page.items {
                if seen.insert(item.id.clone()) {
                    items.push(item);
                } else {
                    duplicates_skipped += 1;
                }
            }

            token = page.next_page_token.filter(|t| !t.is_empty());
            if token.is_none() || page_was_empty {
                break;
            }
        }

        if duplicates_skipped > 0 {
            tracing::debug!(region, duplicates_skipped, "skipped repeated video ids across pages");
        }

        items.truncate(limit);
        Ok(TrendingVideos {
            items,
            duplicates_skipped,
        })
    }

    /// Lists the video categories the API reports for `region`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::fetch_trending_page`].
    pub async fn fetch_video_categories(
        &self,
        region: &str,
    ) -> Result<Vec<VideoCategory>, YoutubeError> {
        let url = self.build_url("videoCategories", &[("part", "snippet"), ("regionCode", region)])?;
        let context = format!("videoCategories.list(regionCode={region})");
        let response: VideoCategoryListResponse = self.get_json(&url, &context).await?;
        Ok(response.items)
    }

    /// Builds `{base}/{resource}?key=...&...` with percent-encoded parameters.
    fn build_url(&self, resource: &str, params: &[(&str, &str)]) -> Result<Url, YoutubeError> {
        let mut url = self
            .base_url
            .join(resource)
            .map_err(|e| YoutubeError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("key", &self.api_key);
        }
        Ok(url)
    }

    /// GETs `url` with retries and deserializes a 2xx body into `T`.
    async fn get_json<T>(&self, url: &Url, context: &str) -> Result<T, YoutubeError>
    where
        T: serde::de::DeserializeOwned,
    {
        let body = retry_with_backoff(context, self.max_retries, self.backoff_base_ms, || {
            let url = url.clone();
            async move { self.request_body(url).await }
        })
        .await?;

        serde_json::from_str(&body).map_err(|e| YoutubeError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }

    /// Sends one GET and returns the body of a 2xx response. Non-2xx bodies
    /// are decoded into [`YoutubeError`].
    async fn request_body(&self, url: Url) -> Result<String, YoutubeError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if status.is_success() {
            Ok(body)
        } else {
            Err(YoutubeError::from_error_body(status.as_u16(), &body))
        }
    }
}
