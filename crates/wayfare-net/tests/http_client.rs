use std::time::Duration;

use axum::{
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use wayfare_net::{Headers, HttpClient, Net, NetError, NetOptions};
use wayfare_test_utils::TestHttpServer;

// ============================================================================
// Test endpoints
// ============================================================================

async fn hello_endpoint() -> &'static str {
    "Hello, World!"
}

async fn missing_endpoint() -> impl IntoResponse {
    StatusCode::NOT_FOUND
}

async fn echo_header_endpoint(headers: HeaderMap) -> impl IntoResponse {
    match headers.get("X-Custom-Header") {
        Some(value) => value.to_str().unwrap_or_default().to_string(),
        None => String::new(),
    }
}

async fn slow_endpoint() -> &'static str {
    tokio::time::sleep(Duration::from_secs(5)).await;
    "too late"
}

fn router() -> Router {
    Router::new()
        .route("/hello", get(hello_endpoint))
        .route("/missing", get(missing_endpoint))
        .route("/echo-header", get(echo_header_endpoint))
        .route("/slow", get(slow_endpoint))
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn get_bytes_returns_full_body() {
    let server = TestHttpServer::new(router()).await;
    let client = HttpClient::new(NetOptions::default());

    let bytes = client.get_bytes(server.url("/hello"), None).await.unwrap();
    assert_eq!(&bytes[..], b"Hello, World!");
}

#[tokio::test]
async fn get_bytes_maps_non_success_status() {
    let server = TestHttpServer::new(router()).await;
    let client = HttpClient::new(NetOptions::default());

    let err = client
        .get_bytes(server.url("/missing"), None)
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), Some(404));
}

#[tokio::test]
async fn get_bytes_sends_custom_headers() {
    let server = TestHttpServer::new(router()).await;
    let client = HttpClient::new(NetOptions::default());

    let mut headers = Headers::new();
    headers.insert("X-Custom-Header", "wayfare");

    let bytes = client
        .get_bytes(server.url("/echo-header"), Some(headers))
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"wayfare");
}

#[tokio::test]
async fn get_bytes_times_out() {
    let server = TestHttpServer::new(router()).await;
    let client = HttpClient::new(NetOptions {
        request_timeout: Duration::from_millis(200),
        ..NetOptions::default()
    });

    let err = client
        .get_bytes(server.url("/slow"), None)
        .await
        .unwrap_err();
    assert!(matches!(err, NetError::Timeout), "got {err:?}");
}

#[tokio::test]
async fn trait_object_dispatch() {
    let server = TestHttpServer::new(router()).await;
    let client: Box<dyn Net> = Box::new(HttpClient::new(NetOptions::default()));

    let bytes = client.get_bytes(server.url("/hello"), None).await.unwrap();
    assert_eq!(bytes.len(), 13);
}
