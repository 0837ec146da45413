//! Short code resolution service.

use std::sync::Arc;

use crate::domain::entities::ShortCode;
use crate::domain::repositories::MappingStore;
use tracing::{error, info, warn};

/// Terminal outcome of a single resolve call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// No code was supplied. The store was not consulted.
    BadRequest,
    /// The code has no mapping.
    NotFound,
    /// The code maps to this link.
    Found(String),
    /// The store could not be queried.
    Unavailable,
}

/// Service for turning short codes back into links.
///
/// Read-only; every failure is converted into a [`Resolution`] here, so callers
/// only branch on the outcome.
pub struct ResolveService<S: MappingStore + ?Sized = dyn MappingStore> {
    store: Arc<S>,
}

impl<S: MappingStore + ?Sized> ResolveService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Resolves a caller-supplied code.
    ///
    /// `None` and the empty string both mean the parameter was absent.
    pub async fn resolve(&self, code: Option<&str>) -> Resolution {
        let Some(code) = code.and_then(|raw| ShortCode::parse(raw).ok()) else {
            warn!("Resolve request without a short code");
            return Resolution::BadRequest;
        };

        match self.store.get(&code).await {
            Ok(Some(link)) => {
                info!(code = %code, link = %link, "Resolved short code");
                Resolution::Found(link)
            }
            Ok(None) => {
                info!(code = %code, "Short code not found");
                Resolution::NotFound
            }
            Err(e) => {
                error!(code = %code, error = %e, "Failed to resolve short code");
                Resolution::Unavailable
            }
        }
    }
}
