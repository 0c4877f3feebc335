//! Top-level router combining page and API routes.
//!
//! # Route Structure
//!
//! - `GET  /`              - Landing page
//! - `POST /shorten`       - Create a short link
//! - `GET  /stats/{code}`  - Link statistics
//! - `GET  /health`        - Health check
//! - `GET  /{code}`        - Short link redirect
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes and the tracing layer.
///
/// Used directly by tests; [`app_router`] adds path normalization on top.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(web::routes::routes())
        .merge(api::routes::routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application service.
///
/// Trailing slashes are trimmed before routing, so `/stats/abc123/` reaches
/// the stats handler.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
