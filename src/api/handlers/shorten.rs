//! Handler for link shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use validator::Validate;

use crate::api::dto::shorten::ShortenRequest;
use crate::error::AppError;
use crate::state::AppState;

/// Creates (or returns the existing) short code for a link.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "link": "https://example.com/a" }
/// ```
///
/// # Response
///
/// `200 OK` with the bare code as a plain-text body, e.g. `2dce0`.
/// Repeating the request returns the same code.
///
/// # Errors
///
/// - 400 Bad Request if the body is not JSON, lacks `link`, or `link` is empty
/// - 409 Conflict if the code belongs to a different link and the collision
///   policy is `reject`
/// - 503 Service Unavailable if the mapping store cannot be reached
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<String, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let code = state
        .shorten_service
        .create_short_code(&payload.link)
        .await?;

    Ok(code.into())
}
