//! Business logic services for the application layer.

pub mod resolve_service;
pub mod shorten_service;

pub use resolve_service::{Resolution, ResolveService};
pub use shorten_service::{CollisionPolicy, ShortenService};
