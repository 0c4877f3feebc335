//! Application error type and its HTTP mapping.
//!
//! Every layer returns [`AppError`]; handlers rely on its [`IntoResponse`]
//! implementation to produce `{"error": "..."}` bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// JSON body returned for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

/// Errors surfaced by services, repositories and handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// `original_url` absent, `null` or empty.
    #[error("Missing URL")]
    MissingUrl,

    /// URL failed syntax validation after the scheme prefix was applied.
    #[error("Invalid URL format")]
    InvalidUrl,

    /// Request body is not JSON or has the wrong shape.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// No link is stored under the requested short code.
    #[error("Short URL not found")]
    NotFound,

    /// Storage could not be reached.
    #[error("Database unavailable: {0}")]
    Unavailable(String),

    /// Every candidate code drawn by the generator was already taken.
    #[error("Failed to generate a unique short code after {attempts} attempts")]
    GenerationExhausted { attempts: usize },

    /// Insert lost a race on the `short_code` unique constraint.
    #[error("Unique constraint violation: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingUrl | AppError::InvalidUrl | AppError::InvalidBody(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::GenerationExhausted { .. } | AppError::Conflict(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message exposed to clients. Internal details stay in the logs.
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::MissingUrl => "Missing URL",
            AppError::InvalidUrl => "Invalid URL format",
            AppError::InvalidBody(_) => "Invalid request body",
            AppError::NotFound => "Short URL not found",
            AppError::Unavailable(_) => "Service unavailable",
            AppError::GenerationExhausted { .. } => "Failed to generate short code",
            AppError::Conflict(_) => "Short code collision, please retry",
            AppError::Internal(_) => "Internal server error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = ErrorBody {
            error: self.public_message(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        match &e {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::WorkerCrashed => AppError::Unavailable(e.to_string()),
            sqlx::Error::Database(db) if db.is_unique_violation() => AppError::Conflict(
                db.constraint()
                    .map(str::to_string)
                    .unwrap_or_else(|| db.message().to_string()),
            ),
            _ => AppError::Internal(e.to_string()),
        }
    }
}
