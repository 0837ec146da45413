//! Mapping store backends.
//!
//! - [`RedisMappingStore`] - Production backend on a shared Redis namespace
//! - [`MemoryMappingStore`] - Process-local map for development and tests

mod memory_store;
mod redis_store;

pub use memory_store::MemoryMappingStore;
pub use redis_store::RedisMappingStore;
