//! Link entity: the long-form destination of a short code.

use std::fmt;

use serde_json::json;

use crate::error::AppError;

/// A non-empty destination string.
///
/// No URL format validation is performed; any non-blank text is accepted and
/// stored exactly as received.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Link(String);

impl Link {
    /// Validates and wraps a raw link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the link is empty or whitespace only.
    pub fn parse(raw: impl Into<String>) -> Result<Self, AppError> {
        let raw = raw.into();

        if raw.trim().is_empty() {
            return Err(AppError::bad_request(
                "Link must not be empty",
                json!({ "field": "link" }),
            ));
        }

        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for Link {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_value_verbatim() {
        let link = Link::parse("  https://example.com/a ").unwrap();
        assert_eq!(link.as_str(), "  https://example.com/a ");
    }

    #[test]
    fn test_parse_accepts_non_url_text() {
        assert!(Link::parse("not a url at all").is_ok());
    }

    #[test]
    fn test_parse_rejects_empty() {
        let err = Link::parse("").unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[test]
    fn test_parse_rejects_whitespace_only() {
        assert!(Link::parse(" \t\n").is_err());
    }

    #[test]
    fn test_compares_with_str() {
        let link = Link::parse("https://example.com").unwrap();
        assert!(link == *"https://example.com");
        assert!(link != *"https://example.org");
    }
}
