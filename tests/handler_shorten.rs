mod common;

use link_shortener::application::services::CollisionPolicy;
use link_shortener::infrastructure::store::MemoryMappingStore;
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::Ordering;

#[tokio::test]
async fn test_shorten_returns_digest_prefix() {
    let server = common::create_test_server(MemoryMappingStore::new(), CollisionPolicy::Trust);

    let response = server
        .post("/shorten")
        .json(&json!({ "link": "https://example.com/a" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.text(), "2dce0");
}

#[tokio::test]
async fn test_shorten_twice_is_idempotent() {
    let store = MemoryMappingStore::new();
    let server = common::create_test_server(store.clone(), CollisionPolicy::Trust);

    let first = server
        .post("/shorten")
        .json(&json!({ "link": "https://example.com/a" }))
        .await;
    let second = server
        .post("/shorten")
        .json(&json!({ "link": "https://example.com/a" }))
        .await;

    first.assert_status_ok();
    second.assert_status_ok();
    assert_eq!(first.text(), second.text());
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_shorten_distinct_links_get_distinct_codes() {
    let store = MemoryMappingStore::new();
    let server = common::create_test_server(store.clone(), CollisionPolicy::Trust);

    let a = server
        .post("/shorten")
        .json(&json!({ "link": "https://example.com/a" }))
        .await;
    let b = server
        .post("/shorten")
        .json(&json!({ "link": "https://example.com/b" }))
        .await;

    assert_eq!(a.text(), "2dce0");
    assert_eq!(b.text(), "d7fe5");
    assert_eq!(store.len(), 2);
}

#[tokio::test]
async fn test_shorten_empty_link_is_bad_request() {
    let store = MemoryMappingStore::new();
    let server = common::create_test_server(store.clone(), CollisionPolicy::Trust);

    let response = server.post("/shorten").json(&json!({ "link": "" })).await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_shorten_whitespace_link_is_bad_request() {
    let server = common::create_test_server(MemoryMappingStore::new(), CollisionPolicy::Trust);

    let response = server.post("/shorten").json(&json!({ "link": "   " })).await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_missing_field_is_bad_request() {
    let server = common::create_test_server(MemoryMappingStore::new(), CollisionPolicy::Trust);

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_shorten_malformed_body_is_bad_request() {
    let server = common::create_test_server(MemoryMappingStore::new(), CollisionPolicy::Trust);

    let response = server.post("/shorten").text("not json").await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_trust_policy_returns_code_of_existing_slot() {
    let store = MemoryMappingStore::new();
    common::insert_mapping(&store, "2dce0", "https://other.example.com").await;
    let server = common::create_test_server(store.clone(), CollisionPolicy::Trust);

    let response = server
        .post("/shorten")
        .json(&json!({ "link": "https://example.com/a" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.text(), "2dce0");
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_shorten_reject_policy_reports_collision() {
    let store = MemoryMappingStore::new();
    common::insert_mapping(&store, "2dce0", "https://other.example.com").await;
    let server = common::create_test_server(store, CollisionPolicy::Reject);

    let response = server
        .post("/shorten")
        .json(&json!({ "link": "https://example.com/a" }))
        .await;

    assert_eq!(response.status_code(), 409);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "conflict");
    assert_eq!(json["error"]["details"]["code"], "2dce0");
}

#[tokio::test]
async fn test_shorten_reject_policy_same_link_succeeds() {
    let store = MemoryMappingStore::new();
    common::insert_mapping(&store, "2dce0", "https://example.com/a").await;
    let server = common::create_test_server(store, CollisionPolicy::Reject);

    let response = server
        .post("/shorten")
        .json(&json!({ "link": "https://example.com/a" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.text(), "2dce0");
}

#[tokio::test]
async fn test_shorten_store_unavailable() {
    let store = Arc::new(common::UnavailableStore::default());
    let server = common::create_unavailable_server(store.clone());

    let response = server
        .post("/shorten")
        .json(&json!({ "link": "https://example.com/a" }))
        .await;

    assert_eq!(response.status_code(), 503);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "store_unavailable");
    assert_eq!(store.calls.load(Ordering::SeqCst), 1);
}
