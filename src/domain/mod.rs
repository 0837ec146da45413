//! Domain layer containing business entities and store contracts.
//!
//! - [`entities`] - [`entities::Link`] and [`entities::ShortCode`] newtypes
//! - [`repositories`] - The [`repositories::MappingStore`] trait
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Business logic lives in [`crate::application::services`].

pub mod entities;
pub mod repositories;
