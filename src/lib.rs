//! # Link Shortener
//!
//! A deterministic link shortening service built with Axum and Redis.
//!
//! A link is shortened to the first few hex characters of its SHA-256 digest,
//! so the same link always gets the same code. Mappings live in a shared Redis
//! key space (key = code, value = link) and are never expired or removed.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Link/code newtypes and the store trait
//! - **Application Layer** ([`application`]) - Shorten and resolve services
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis and in-memory stores
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Endpoints
//!
//! - `POST /shorten` with `{"link": "..."}` returns the bare code
//! - `GET /{code}` returns an HTML page redirecting to the link
//! - `GET /health` reports store reachability
//!
//! ## Quick Start
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379"
//! cargo run
//!
//! curl -X POST localhost:3000/shorten -H 'content-type: application/json' \
//!      -d '{"link": "https://example.com/a"}'
//! # 2dce0
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        CollisionPolicy, Resolution, ResolveService, ShortenService,
    };
    pub use crate::domain::entities::{Link, ShortCode};
    pub use crate::domain::repositories::{MappingStore, SetOutcome};
    pub use crate::error::AppError;
    pub use crate::infrastructure::store::{MemoryMappingStore, RedisMappingStore};
    pub use crate::state::AppState;
    pub use crate::utils::code_generator::CodeGenerator;
}
