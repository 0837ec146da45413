//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{CollisionPolicy, ResolveService, ShortenService};
use crate::domain::repositories::MappingStore;
use crate::utils::code_generator::CodeGenerator;

/// Services and the store handle, built once per process.
///
/// Both services share the same [`MappingStore`] instance.
#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<ShortenService>,
    pub resolve_service: Arc<ResolveService>,
    pub store: Arc<dyn MappingStore>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn MappingStore>,
        generator: CodeGenerator,
        policy: CollisionPolicy,
    ) -> Self {
        Self {
            shorten_service: Arc::new(ShortenService::new(store.clone(), generator, policy)),
            resolve_service: Arc::new(ResolveService::new(store.clone())),
            store,
        }
    }
}
