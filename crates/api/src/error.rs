use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Business outcomes of the validation endpoint (bad request, not found) are
/// encoded in its response envelope and never travel as `AppError`. What
/// reaches this type is a failure the service cannot answer through.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A record store error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An internal error with a human-readable message (e.g. a caught panic).
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Every variant is a 500 with a sanitized body. A store failure,
        // `RowNotFound` included, must never read as "no such record".
        match &self {
            AppError::Database(err) => tracing::error!(error = %err, "Database error"),
            AppError::InternalError(msg) => tracing::error!(error = %msg, "Internal error"),
        }

        let body = json!({
            "error": "An internal error occurred",
            "code": "INTERNAL_ERROR",
        });

        (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
    }
}
