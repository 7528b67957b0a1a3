//! Tests for the HTTP layer

use super::*;
use crate::config::ApiConfig;
use crate::error::Error;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(base_url: &str) -> ApiConfig {
    ApiConfig::builder()
        .base_url(base_url)
        .no_rate_limit()
        .build()
}

#[tokio::test]
async fn test_get_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pokemon/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": 42
        })))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new(&test_config(&mock_server.uri())).unwrap();
    let body: serde_json::Value = client.get_json("/pokemon/1").await.unwrap();

    assert_eq!(body["value"], 42);
}

#[tokio::test]
async fn test_get_with_query_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .and(query_param("offset", "100"))
        .and(query_param("limit", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new(&test_config(&mock_server.uri())).unwrap();
    let response = client
        .get_with_query(
            "/pokemon",
            &[("offset", "100".to_string()), ("limit", "50".to_string())],
        )
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_absolute_url_bypasses_base() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/elsewhere"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&mock_server)
        .await;

    // Base URL points at a dead host; the absolute URL must win.
    let client = HttpClient::new(&test_config("https://unreachable.invalid")).unwrap();
    let body: serde_json::Value = client
        .get_json(&format!("{}/elsewhere", mock_server.uri()))
        .await
        .unwrap();

    assert_eq!(body["ok"], true);
}

#[tokio::test]
async fn test_non_2xx_becomes_http_status_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pokemon/9999"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new(&test_config(&mock_server.uri())).unwrap();
    let err = client.get("/pokemon/9999").await.unwrap_err();

    match err {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body, "Not Found");
        }
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpClient::new(&test_config(&mock_server.uri())).unwrap();
    let err = client.get("/pokemon").await.unwrap_err();

    assert_eq!(err.status(), Some(500));
    // Mock expectation of exactly one request is verified on drop.
}

#[tokio::test]
async fn test_malformed_body_becomes_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pokemon/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new(&test_config(&mock_server.uri())).unwrap();
    let err = client
        .get_json::<serde_json::Value>("/pokemon/1")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Decode { .. }), "got {err:?}");
}

#[tokio::test]
async fn test_unreachable_host_becomes_transport_error() {
    // Reserved TLD, guaranteed to fail resolution.
    let client = HttpClient::new(&test_config("https://unreachable.invalid")).unwrap();
    let err = client.get("/pokemon").await.unwrap_err();

    assert!(err.is_transient(), "got {err:?}");
    assert!(matches!(
        err,
        Error::Transport { .. } | Error::Timeout { .. }
    ));
}

#[tokio::test]
async fn test_rate_limiter_wired_from_config() {
    let config = ApiConfig::builder()
        .base_url("https://api.example.com")
        .rate_limit(RateLimiterConfig::new(5, 5))
        .build();
    let client = HttpClient::new(&config).unwrap();
    assert!(client.has_rate_limiter());

    let client = HttpClient::new(&test_config("https://api.example.com")).unwrap();
    assert!(!client.has_rate_limiter());
}
