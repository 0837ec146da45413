//! Short code entity: the store key derived from a link.

use std::fmt;

use serde_json::json;

use crate::error::AppError;

/// A short code identifying a stored mapping.
///
/// Generated codes are lowercase hexadecimal prefixes of a digest. Codes
/// received from callers are only checked for emptiness, so an unknown or
/// oddly-shaped code resolves to "not found" rather than "bad request".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShortCode(String);

impl ShortCode {
    /// Wraps a caller-supplied code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the code is empty.
    pub fn parse(raw: impl Into<String>) -> Result<Self, AppError> {
        let raw = raw.into();

        if raw.is_empty() {
            return Err(AppError::bad_request(
                "Short code must not be empty",
                json!({ "field": "code" }),
            ));
        }

        Ok(Self(raw))
    }

    /// Wraps a code produced by the generator, which never yields an empty string.
    pub(crate) fn from_generated(code: String) -> Self {
        debug_assert!(!code.is_empty());
        Self(code)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ShortCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ShortCode> for String {
    fn from(code: ShortCode) -> Self {
        code.0
    }
}
