//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL and counts the visit.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Increment the click counter and fetch the link in one statement
/// 2. Return 302 Found with `Location` set to the stored URL
///
/// # Errors
///
/// Returns 404 `{"error": "Short URL not found"}` if the code doesn't exist.
/// Returns 503 if the database is unreachable.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let link = state.link_service.follow(&code).await?;

    debug!(code = %code, clicks = link.clicks, "Redirecting");

    Ok((
        StatusCode::FOUND,
        [(header::LOCATION, link.original_url)],
    ))
}
