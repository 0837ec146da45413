//! Repository trait definitions for the domain layer.
//!
//! The services depend only on these traits; concrete backends live in
//! `crate::infrastructure::store`. Mock implementations are generated with
//! `mockall` for unit tests.

pub mod mapping_store;

pub use mapping_store::{MappingStore, SetOutcome};

#[cfg(test)]
pub use mapping_store::MockMappingStore;
