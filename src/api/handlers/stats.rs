//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the destination and click count of a short link.
///
/// # Endpoint
///
/// `GET /stats/{code}`
///
/// # Response
///
/// ```json
/// { "original_url": "https://example.com", "clicks": 3 }
/// ```
///
/// # Errors
///
/// Returns 404 `{"error": "Short URL not found"}` if the code doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let link = state.link_service.stats(&code).await?;

    Ok(Json(link.into()))
}
