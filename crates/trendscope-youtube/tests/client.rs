//! Integration tests for `YoutubeClient` using wiremock HTTP mocks.

use trendscope_youtube::{YoutubeClient, YoutubeError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> YoutubeClient {
    YoutubeClient::with_base_url("test-key", base_url, 30, "trendscope-test/0.1", 2, 0)
        .expect("client construction should not fail")
}

fn video(id: &str) -> serde_json::Value {
    serde_json::json!({
        "kind": "youtube#video",
        "id": id,
        "snippet": {
            "publishedAt": "2025-03-01T14:05:00Z",
            "title": format!("Video {id}"),
            "description": "",
            "channelTitle": "Channel",
            "categoryId": "10"
        },
        "statistics": { "viewCount": "100", "likeCount": "5", "commentCount": "1" },
        "contentDetails": { "duration": "PT4M13S" }
    })
}

#[tokio::test]
async fn fetch_trending_returns_single_page() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "kind": "youtube#videoListResponse",
        "items": [video("a"), video("b"), video("c")],
        "pageInfo": { "totalResults": 3, "resultsPerPage": 3 }
    });

    Mock::given(method("GET"))
        .and(path("/videos"))
        .and(query_param("chart", "mostPopular"))
        .and(query_param("regionCode", "US"))
        .and(query_param("part", "snippet,statistics,contentDetails"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let items = client
        .fetch_trending("US", 50, 0)
        .await
        .expect("should parse trending page")
        .items;

    assert_eq!(items.len(), 3);
    assert_eq!(items[0].id, "a");
    assert_eq!(items[2].id, "c");
}

#[tokio::test]
async fn fetch_trending_follows_page_tokens_and_truncates_to_limit() {
    let server = MockServer::start().await;

    let page_two = serde_json::json!({
        "items": [video("d"), video("e"), video("f")],
        "nextPageToken": "CAYQAA"
    });
    Mock::given(method("GET"))
        .and(path("/videos"))
        .and(query_param("pageToken", "CAMQAA"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&page_two))
        .expect(1)
        .mount(&server)
        .await;

    let page_one = serde_json::json!({
        "items": [video("a"), video("b"), video("c")],
        "nextPageToken": "CAMQAA"
    });
    Mock::given(method("GET"))
        .and(path("/videos"))
        .and(query_param("maxResults", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&page_one))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let items = client
        .fetch_trending("GB", 5, 0)
        .await
        .expect("should follow pagination")
        .items;

    let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c", "d", "e"]);
}

#[tokio::test]
async fn overlapping_pages_do_not_count_repeats_toward_limit() {
    let server = MockServer::start().await;

    let page_two = serde_json::json!({
        "items": [video("b"), video("c"), video("d")]
    });
    Mock::given(method("GET"))
        .and(path("/videos"))
        .and(query_param("pageToken", "NEXT"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&page_two))
        .expect(1)
        .mount(&server)
        .await;

    let page_one = serde_json::json!({
        "items": [video("a"), video("b")],
        "nextPageToken": "NEXT"
    });
    Mock::given(method("GET"))
        .and(path("/videos"))
        .and(query_param("maxResults", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&page_one))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let fetched = client
        .fetch_trending("US", 3, 0)
        .await
        .expect("should follow pagination past the repeat");

    let ids: Vec<&str> = fetched.items.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
    assert_eq!(fetched.duplicates_skipped, 1);
}

#[tokio::test]
async fn fetch_trending_keeps_hidden_likes_absent() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "items": [{
            "id": "nolikes",
            "snippet": { "title": "No likes here", "categoryId": "22" },
            "statistics": { "viewCount": "42" },
            "contentDetails": { "duration": "PT30S" }
        }]
    });
    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let items = client.fetch_trending("JP", 10, 0).await.unwrap().items;
    let row = trendscope_youtube::to_raw_row("JP", items.into_iter().next().unwrap());

    assert_eq!(row.view_count.as_deref(), Some("42"));
    assert!(row.like_count.is_none(), "hidden likes must stay null");
    assert!(row.comment_count.is_none());
}

#[tokio::test]
async fn invalid_region_returns_api_error_without_retry() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "error": {
            "code": 400,
            "message": "The regionCode parameter specifies an invalid region code.",
            "errors": [{ "domain": "youtube.parameter", "reason": "invalidRegionCode" }]
        }
    });
    Mock::given(method("GET"))
        .and(path("/videos"))
        .and(query_param("regionCode", "ZZ"))
        .respond_with(ResponseTemplate::new(400).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.fetch_trending("ZZ", 10, 0).await.unwrap_err();

    assert!(
        matches!(err, YoutubeError::Api { status: 400, ref reason, .. } if reason == "invalidRegionCode"),
        "expected invalidRegionCode API error, got: {err:?}"
    );
}

#[tokio::test]
async fn quota_exceeded_is_surfaced_without_retry() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "error": {
            "code": 403,
            "message": "The request cannot be completed because you have exceeded your quota.",
            "errors": [{ "domain": "youtube.quota", "reason": "quotaExceeded" }]
        }
    });
    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(ResponseTemplate::new(403).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.fetch_trending("US", 10, 0).await.unwrap_err();

    assert!(matches!(err, YoutubeError::QuotaExceeded(_)), "got: {err:?}");
}

#[tokio::test]
async fn server_error_is_retried_then_succeeds() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    let body = serde_json::json!({ "items": [video("a")] });
    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let items = client
        .fetch_trending("US", 10, 0)
        .await
        .expect("should succeed after one retry")
        .items;
    assert_eq!(items.len(), 1);
}

#[tokio::test]
async fn server_error_gives_up_after_bounded_retries() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(3)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.fetch_trending("US", 10, 0).await.unwrap_err();
    assert!(matches!(err, YoutubeError::Api { status: 500, .. }), "got: {err:?}");
}

#[tokio::test]
async fn malformed_body_is_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"items\": 5}"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.fetch_trending("US", 10, 0).await.unwrap_err();
    assert!(
        matches!(err, YoutubeError::Deserialize { ref context, .. } if context.contains("US")),
        "got: {err:?}"
    );
}

#[tokio::test]
async fn fetch_video_categories_returns_pairs() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "items": [
            { "id": "1", "snippet": { "title": "Film & Animation", "assignable": true } },
            { "id": "10", "snippet": { "title": "Music", "assignable": true } },
            { "id": "99" }
        ]
    });
    Mock::given(method("GET"))
        .and(path("/videoCategories"))
        .and(query_param("part", "snippet"))
        .and(query_param("regionCode", "US"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let categories = client.fetch_video_categories("US").await.unwrap();
    let pairs: Vec<(String, String)> = categories
        .into_iter()
        .filter_map(trendscope_youtube::VideoCategory::into_pair)
        .collect();

    assert_eq!(
        pairs,
        vec![
            ("1".to_string(), "Film & Animation".to_string()),
            ("10".to_string(), "Music".to_string()),
        ]
    );
}
