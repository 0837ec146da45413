mod common;

use link_shortener::application::services::CollisionPolicy;
use link_shortener::infrastructure::store::MemoryMappingStore;
use axum::extract::connect_info::MockConnectInfo;
use axum_test::TestServer;
use link_shortener::routes::router;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::Ordering;

const NOT_FOUND_TEXT: &str = "Link not found, try another code";
const BAD_REQUEST_TEXT: &str = "That link format is not correct";

#[tokio::test]
async fn test_redirect_found() {
    let store = MemoryMappingStore::new();
    common::insert_mapping(&store, "2dce0", "https://example.com/a").await;
    let server = common::create_test_server(store, CollisionPolicy::Trust);

    let response = server.get("/2dce0").await;

    response.assert_status_ok();
    let content_type = response.header("content-type");
    assert!(content_type.to_str().unwrap().starts_with("text/html"));

    let body = response.text();
    assert!(body.contains(r#"http-equiv="refresh""#));
    assert!(body.contains("content=\"0; url=https://example.com/a\""));
}

#[tokio::test]
async fn test_shorten_then_resolve_round_trip() {
    let server = common::create_test_server(MemoryMappingStore::new(), CollisionPolicy::Trust);

    let created = server
        .post("/shorten")
        .json(&json!({ "link": "https://example.com/a" }))
        .await;
    created.assert_status_ok();
    let code = created.text();

    let response = server.get(&format!("/{code}")).await;

    response.assert_status_ok();
    assert!(response.text().contains("url=https://example.com/a"));
}

#[tokio::test]
async fn test_redirect_unknown_code_is_not_found() {
    let server = common::create_test_server(MemoryMappingStore::new(), CollisionPolicy::Trust);

    let response = server.get("/2dce0").await;

    response.assert_status_not_found();
    let content_type = response.header("content-type");
    assert!(content_type.to_str().unwrap().starts_with("text/html"));
    assert!(response.text().contains(NOT_FOUND_TEXT));
}

#[tokio::test]
async fn test_redirect_without_code_is_bad_request() {
    let store = Arc::new(common::UnavailableStore::default());
    let server = common::create_unavailable_server(store.clone());

    let response = server.get("/").await;

    response.assert_status_bad_request();
    assert!(response.text().contains(BAD_REQUEST_TEXT));
    // The store is never consulted for a missing code.
    assert_eq!(store.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_redirect_store_unavailable_is_internal_error() {
    let store = Arc::new(common::UnavailableStore::default());
    let server = common::create_unavailable_server(store.clone());

    let response = server.get("/2dce0").await;

    assert_eq!(response.status_code(), 500);
    assert!(response.text().is_empty());
    assert_eq!(store.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_redirect_escapes_link_in_html() {
    let store = MemoryMappingStore::new();
    common::insert_mapping(&store, "abcde", "https://example.com/?a=1&b=\"2\"").await;
    let server = common::create_test_server(store, CollisionPolicy::Trust);

    let response = server.get("/abcde").await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("content=\"0; url=https://example.com/?a=1&"));
    assert!(!body.contains("a=1&b"));
    assert!(!body.contains("b=\"2\""));
}

#[tokio::test]
async fn test_health_path_is_not_a_code() {
    let store = MemoryMappingStore::new();
    common::insert_mapping(&store, "health", "https://example.com/hijack").await;
    let server = common::create_test_server(store, CollisionPolicy::Trust);

    let response = server.get("/health").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn test_redirect_requires_client_address() {
    let state = common::create_test_state(
        Arc::new(MemoryMappingStore::new()),
        CollisionPolicy::Trust,
    );
    let server = TestServer::new(router(state)).unwrap();

    let response = server.get("/2dce0").await;

    assert_eq!(response.status_code(), 500);
}

#[tokio::test]
async fn test_redirect_with_client_address_resolves() {
    let store = MemoryMappingStore::new();
    common::insert_mapping(&store, "2dce0", "https://example.com/a").await;
    let state = common::create_test_state(Arc::new(store), CollisionPolicy::Trust);
    let addr: SocketAddr = "203.0.113.7:40000".parse().unwrap();
    let server = TestServer::new(router(state).layer(MockConnectInfo(addr))).unwrap();

    let found = server.get("/2dce0").await;
    let missing = server.get("/").await;

    found.assert_status_ok();
    assert!(found.text().contains("url=https://example.com/a"));
    missing.assert_status_bad_request();
}
