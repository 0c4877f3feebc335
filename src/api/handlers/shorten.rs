//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for one URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "original_url": "example.com" }
/// ```
///
/// URLs without `http://` or `https://` are stored with `https://` prepended.
///
/// # Response
///
/// ```json
/// { "short_url": "https://s.example.com/aB3xY9" }
/// ```
///
/// # Errors
///
/// - 400 `{"error": "Missing URL"}` if `original_url` is absent or empty
/// - 400 `{"error": "Invalid URL format"}` if the URL fails validation
/// - 400 `{"error": "Invalid request body"}` if the body is not the expected JSON
/// - 503 if the database is unreachable
/// - 500 if no unique code could be generated or inserted
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload.map_err(|e| AppError::InvalidBody(e.body_text()))?;

    let link = state
        .link_service
        .shorten(payload.original_url.as_deref())
        .await?;

    Ok(Json(ShortenResponse {
        short_url: state.link_service.short_url(&link.short_code),
    }))
}
