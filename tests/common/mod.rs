#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum::extract::connect_info::MockConnectInfo;
use axum_test::TestServer;
use link_shortener::application::services::CollisionPolicy;
use link_shortener::domain::entities::{Link, ShortCode};
use link_shortener::domain::repositories::{MappingStore, SetOutcome};
use link_shortener::error::AppError;
use link_shortener::infrastructure::store::MemoryMappingStore;
use link_shortener::routes::router;
use link_shortener::state::AppState;
use link_shortener::utils::code_generator::CodeGenerator;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A store whose backend is always down. Counts every call it receives.
#[derive(Default)]
pub struct UnavailableStore {
    pub calls: AtomicUsize,
}

impl UnavailableStore {
    fn fail<T>(&self) -> Result<T, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(AppError::store_unavailable(
            "Mapping store unavailable",
            json!({ "reason": "connection refused" }),
        ))
    }
}

#[async_trait]
impl MappingStore for UnavailableStore {
    async fn exists(&self, _code: &ShortCode) -> Result<bool, AppError> {
        self.fail()
    }

    async fn get(&self, _code: &ShortCode) -> Result<Option<String>, AppError> {
        self.fail()
    }

    async fn set_if_absent(&self, _code: &ShortCode, _link: &Link) -> Result<SetOutcome, AppError> {
        self.fail()
    }

    async fn health_check(&self) -> bool {
        false
    }
}

pub const TEST_CLIENT_ADDR: &str = "127.0.0.1:12345";

/// Application router with a fixed client address, as `serve` would provide it.
pub fn create_test_app(state: AppState) -> Router {
    let addr: SocketAddr = TEST_CLIENT_ADDR.parse().unwrap();
    router(state).layer(MockConnectInfo(addr))
}

pub fn create_test_state(store: Arc<dyn MappingStore>, policy: CollisionPolicy) -> AppState {
    AppState::new(store, CodeGenerator::default(), policy)
}

/// Full application router over an in-memory store.
pub fn create_test_server(store: MemoryMappingStore, policy: CollisionPolicy) -> TestServer {
    let state = create_test_state(Arc::new(store), policy);
    TestServer::new(create_test_app(state)).unwrap()
}

/// Full application router over an always-failing store.
pub fn create_unavailable_server(store: Arc<UnavailableStore>) -> TestServer {
    let state = create_test_state(store, CollisionPolicy::Trust);
    TestServer::new(create_test_app(state)).unwrap()
}

/// Writes a mapping directly, bypassing the shorten service.
pub async fn insert_mapping(store: &MemoryMappingStore, code: &str, link: &str) {
    store
        .set_if_absent(
            &ShortCode::parse(code).unwrap(),
            &Link::parse(link).unwrap(),
        )
        .await
        .unwrap();
}
