//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorten`     - Create a short code (JSON in, plain text out)
//! - `GET  /health`      - Health check of the mapping store
//! - `GET  /{link}`      - Resolve a short code to an HTML redirect page
//! - `GET  /`            - Resolve request without a code (400 page)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler, redirect_missing_code_handler};
use crate::api::middleware::tracing as request_tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

/// All routes with request tracing, without path normalization.
///
/// `/health` is registered explicitly and therefore takes precedence over the
/// `/{link}` capture, so `health` can never be resolved as a code.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(redirect_missing_code_handler))
        .route("/health", get(health_handler))
        .route("/{link}", get(redirect_handler))
        .merge(api::routes::api_routes())
        .with_state(state)
        .layer(request_tracing::layer())
}
