//! Deterministic short code generation.
//!
//! A code is the first `length` characters of the lowercase hexadecimal
//! SHA-256 digest of the link's UTF-8 bytes. The same link always yields the
//! same code; there is no salt and no randomness.
//!
//! The code space is `16^length`, so distinct links can collide. How a
//! collision is handled is decided by
//! [`crate::application::services::CollisionPolicy`], not here.

use crate::domain::entities::{Link, ShortCode};
use crate::error::AppError;
use serde_json::json;
use sha2::{Digest, Sha256};

/// Default code length, compatible with previously issued codes.
pub const DEFAULT_CODE_LENGTH: usize = 5;

/// Length of a full hex-encoded SHA-256 digest.
pub const MAX_CODE_LENGTH: usize = 64;

/// Pure link-to-code function with a configurable code length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeGenerator {
    length: usize,
}

impl CodeGenerator {
    /// Creates a generator producing codes of `length` hex characters.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] unless `1 <= length <= 64`. The length
    /// is a deployment setting, never request input.
    pub fn new(length: usize) -> Result<Self, AppError> {
        if length == 0 || length > MAX_CODE_LENGTH {
            return Err(AppError::internal(
                format!("Code length must be between 1 and {MAX_CODE_LENGTH}"),
                json!({ "provided_length": length }),
            ));
        }

        Ok(Self { length })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Derives the short code for a link.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let link = Link::parse("https://example.com/a")?;
    /// assert_eq!(CodeGenerator::default().generate(&link).as_str(), "2dce0");
    /// ```
    pub fn generate(&self, link: &Link) -> ShortCode {
        let digest = Sha256::digest(link.as_str().as_bytes());
        let mut code = hex::encode(digest);
        code.truncate(self.length);

        ShortCode::from_generated(code)
    }

    /// Validates a raw string as a [`Link`] and derives its code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the link is empty.
    pub fn generate_from_str(&self, raw: &str) -> Result<ShortCode, AppError> {
        let link = Link::parse(raw)?;
        Ok(self.generate(&link))
    }
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self {
            length: DEFAULT_CODE_LENGTH,
        }
    }
}
