//! Infrastructure layer for external integrations.
//!
//! Implements the store contract defined by the domain layer.
//!
//! # Modules
//!
//! - [`store`] - Redis-backed and in-memory [`crate::domain::repositories::MappingStore`]s

pub mod store;
