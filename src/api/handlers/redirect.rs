//! Handler for short code resolution.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{ConnectInfo, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use std::net::SocketAddr;

use tracing::{Instrument, info_span};

use crate::application::services::Resolution;
use crate::state::AppState;

/// Page that sends the browser on to the resolved link.
///
/// Renders `templates/redirect.html`: a zero-delay meta refresh. The link is
/// HTML-escaped into the attribute.
#[derive(Template, WebTemplate)]
#[template(path = "redirect.html")]
struct RedirectTemplate {
    link: String,
}

/// Fixed page for codes without a mapping (`templates/not_found.html`).
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
struct NotFoundTemplate {}

/// Fixed page for requests without a code (`templates/bad_request.html`).
#[derive(Template, WebTemplate)]
#[template(path = "bad_request.html")]
struct BadRequestTemplate {}

/// Resolves a short code and redirects to its link.
///
/// # Endpoint
///
/// `GET /{link}`, where the `link` path parameter is the short code.
///
/// # Responses
///
/// All bodies are `text/html`.
///
/// - **200 OK**: meta-refresh page pointing at the stored link
/// - **404 Not Found**: fixed "link not found" page
/// - **500 Internal Server Error**: mapping store unavailable, empty body
///
/// Resolution logs carry the caller's address as the `client` span field.
pub async fn redirect_handler(
    Path(link): Path<String>,
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Response {
    let resolution = state
        .resolve_service
        .resolve(Some(&link))
        .instrument(info_span!("resolve", client = %addr))
        .await;

    render(resolution)
}

/// Handles a resolve request that carries no code.
///
/// # Endpoint
///
/// `GET /`
///
/// Always **400 Bad Request** with the fixed "bad request format" page; the
/// store is not consulted.
pub async fn redirect_missing_code_handler(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Response {
    let resolution = state
        .resolve_service
        .resolve(None)
        .instrument(info_span!("resolve", client = %addr))
        .await;

    render(resolution)
}

fn render(resolution: Resolution) -> Response {
    match resolution {
        Resolution::Found(link) => RedirectTemplate { link }.into_response(),
        Resolution::NotFound => (StatusCode::NOT_FOUND, NotFoundTemplate {}).into_response(),
        Resolution::BadRequest => (StatusCode::BAD_REQUEST, BadRequestTemplate {}).into_response(),
        Resolution::Unavailable => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
