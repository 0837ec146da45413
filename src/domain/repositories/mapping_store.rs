//! Store trait for code-to-link mappings.

use crate::domain::entities::{Link, ShortCode};
use crate::error::AppError;
use async_trait::async_trait;

/// Result of a conditional write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOutcome {
    /// The slot was empty and now holds the link.
    Created,
    /// The slot already held a value; nothing was written.
    AlreadyPresent,
}

/// A shared key-value namespace mapping short codes to links.
///
/// Keys are codes, values are raw link strings. Entries are never expired or
/// removed.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::RedisMappingStore`] - Redis backend
/// - [`crate::infrastructure::store::MemoryMappingStore`] - process-local map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingStore: Send + Sync {
    /// Checks whether a code slot is occupied.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on backend failures.
    async fn exists(&self, code: &ShortCode) -> Result<bool, AppError>;

    /// Fetches the link stored under a code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(link))` if found
    /// - `Ok(None)` if the slot is empty
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on backend failures.
    async fn get(&self, code: &ShortCode) -> Result<Option<String>, AppError>;

    /// Writes the mapping only if the slot is empty.
    ///
    /// The check and the write are a single atomic operation on the backend,
    /// so of several concurrent writers exactly one observes
    /// [`SetOutcome::Created`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on backend failures.
    async fn set_if_absent(&self, code: &ShortCode, link: &Link) -> Result<SetOutcome, AppError>;

    /// Checks if the backend is reachable.
    async fn health_check(&self) -> bool;
}
