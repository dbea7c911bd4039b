use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use flowtrack_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `flowtrack_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Input failed field-level validation.
    #[error("{message}")]
    Validation {
        message: &'static str,
        errors: validator::ValidationErrors,
    },
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity } => (
                    StatusCode::NOT_FOUND,
                    json!({ "error": format!("{entity} not found") }),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, json!({ "error": msg }))
                }
            },

            AppError::Database(err) => classify_sqlx_error(err),

            AppError::Validation { message, errors } => (
                StatusCode::BAD_REQUEST,
                json!({ "error": message, "details": errors }),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status and response body.
///
/// - `RowNotFound` maps to 404.
/// - Everything else maps to 500 with a sanitized message; the full error
///   is logged server-side only.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, serde_json::Value) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            json!({ "error": "Resource not found" }),
        ),
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "An internal error occurred" }),
            )
        }
    }
}
