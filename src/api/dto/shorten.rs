//! DTOs for link shortening endpoint.

use serde::Deserialize;
use validator::Validate;

/// Request to shorten a single link.
///
/// ```json
/// { "link": "https://example.com/a" }
/// ```
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The destination to shorten. Any non-empty string is accepted.
    #[validate(length(min = 1, message = "Link must not be empty"))]
    pub link: String,
}
