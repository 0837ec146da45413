//! Application layer services implementing business logic.
//!
//! Services consume the [`crate::domain::repositories::MappingStore`] trait and
//! provide a small API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::shorten_service::ShortenService`] - Idempotent code creation
//! - [`services::resolve_service::ResolveService`] - Code-to-link resolution

pub mod services;
