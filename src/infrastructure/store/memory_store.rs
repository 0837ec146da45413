//! In-memory mapping store.

use std::sync::Arc;

use crate::domain::entities::{Link, ShortCode};
use crate::domain::repositories::{MappingStore, SetOutcome};
use crate::error::AppError;
use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;

/// A process-local mapping store.
///
/// Used when no Redis connection is configured and in tests. Mappings are
/// lost when the process exits and are not shared between instances.
/// Clones share the same underlying map.
#[derive(Clone, Default)]
pub struct MemoryMappingStore {
    entries: Arc<DashMap<String, String>>,
}

impl MemoryMappingStore {
    pub fn new() -> Self {
        debug!("Using MemoryMappingStore (mappings are process-local)");
        Self::default()
    }

    /// Number of stored mappings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl MappingStore for MemoryMappingStore {
    async fn exists(&self, code: &ShortCode) -> Result<bool, AppError> {
        Ok(self.entries.contains_key(code.as_str()))
    }

    async fn get(&self, code: &ShortCode) -> Result<Option<String>, AppError> {
        Ok(self
            .entries
            .get(code.as_str())
            .map(|entry| entry.value().clone()))
    }

    async fn set_if_absent(&self, code: &ShortCode, link: &Link) -> Result<SetOutcome, AppError> {
        match self.entries.entry(code.as_str().to_string()) {
            Entry::Occupied(_) => Ok(SetOutcome::AlreadyPresent),
            Entry::Vacant(slot) => {
                slot.insert(link.as_str().to_string());
                Ok(SetOutcome::Created)
            }
        }
    }

    async fn health_check(&self) -> bool {
        true
    }
}
