//! Short code creation service.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::domain::entities::{Link, ShortCode};
use crate::domain::repositories::{MappingStore, SetOutcome};
use crate::error::AppError;
use crate::utils::code_generator::CodeGenerator;
use serde_json::json;
use tracing::{debug, info, warn};

/// What to do when a generated code is already taken.
///
/// Codes are truncated digests, so two different links can share a code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CollisionPolicy {
    /// Return the existing code without looking at the stored link. A colliding
    /// link silently receives the code of whichever link was stored first.
    #[default]
    Trust,
    /// Compare the stored link with the requested one and fail with
    /// [`AppError::Conflict`] if they differ.
    Reject,
}

impl FromStr for CollisionPolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trust" => Ok(Self::Trust),
            "reject" => Ok(Self::Reject),
            other => Err(AppError::bad_request(
                "Collision policy must be 'trust' or 'reject'",
                json!({ "provided": other }),
            )),
        }
    }
}

impl fmt::Display for CollisionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trust => f.write_str("trust"),
            Self::Reject => f.write_str("reject"),
        }
    }
}

/// Service for creating short codes.
///
/// Creation is idempotent: shortening the same link twice yields the same code
/// and leaves a single mapping in the store.
pub struct ShortenService<S: MappingStore + ?Sized = dyn MappingStore> {
    store: Arc<S>,
    generator: CodeGenerator,
    policy: CollisionPolicy,
}

impl<S: MappingStore + ?Sized> ShortenService<S> {
    /// Creates a new shorten service.
    pub fn new(store: Arc<S>, generator: CodeGenerator, policy: CollisionPolicy) -> Self {
        Self {
            store,
            generator,
            policy,
        }
    }

    pub fn generator(&self) -> &CodeGenerator {
        &self.generator
    }

    pub fn policy(&self) -> CollisionPolicy {
        self.policy
    }

    /// Validates a raw link and creates its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the link is empty.
    /// See [`Self::create`] for the remaining error cases.
    pub async fn create_short_code(&self, raw_link: &str) -> Result<ShortCode, AppError> {
        let link = Link::parse(raw_link)?;
        self.create(&link).await
    }

    /// Derives the code for `link` and persists the mapping if the slot is free.
    ///
    /// # Flow
    ///
    /// 1. Generate the code
    /// 2. If the slot is taken, apply the [`CollisionPolicy`] and return
    /// 3. Otherwise write with set-if-absent; if a concurrent writer won the
    ///    slot in between, apply the policy to the winner's value
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on backend failures.
    /// Returns [`AppError::Conflict`] under [`CollisionPolicy::Reject`] when the
    /// slot holds a different link.
    pub async fn create(&self, link: &Link) -> Result<ShortCode, AppError> {
        let code = self.generator.generate(link);
        debug!(code = %code, link = %link, "Generated short code");

        match self.policy {
            CollisionPolicy::Trust => {
                if self.store.exists(&code).await? {
                    debug!(code = %code, "Code already stored, returning it unchecked");
                    return Ok(code);
                }
            }
            CollisionPolicy::Reject => {
                if let Some(stored) = self.store.get(&code).await? {
                    return verify_stored(code, link, &stored);
                }
            }
        }

        match self.store.set_if_absent(&code, link).await? {
            SetOutcome::Created => {
                info!(code = %code, link = %link, "Link shortened");
                Ok(code)
            }
            SetOutcome::AlreadyPresent => {
                debug!(code = %code, "Slot taken by a concurrent writer");
                match self.policy {
                    CollisionPolicy::Trust => Ok(code),
                    CollisionPolicy::Reject => match self.store.get(&code).await? {
                        Some(stored) => verify_stored(code, link, &stored),
                        None => Err(AppError::internal(
                            "Short code slot reported taken but holds no value",
                            json!({ "code": code.as_str() }),
                        )),
                    },
                }
            }
        }
    }
}

fn verify_stored(code: ShortCode, link: &Link, stored: &str) -> Result<ShortCode, AppError> {
    if link == stored {
        return Ok(code);
    }

    warn!(code = %code, link = %link, "Short code collision with a different link");
    Err(AppError::conflict(
        "Short code is already taken by a different link",
        json!({ "code": code.as_str() }),
    ))
}
