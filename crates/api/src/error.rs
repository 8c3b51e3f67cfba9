use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use facility_core::error::CoreError;
use facility_core::types::DbId;
use facility_db::error::StoreError;

use crate::response::ApiResponse;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the standard failure envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `facility_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error that is not a domain error.
    #[error("Database error: {0}")]
    Database(sqlx::Error),

    /// A malformed request (body, path, or query) with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn not_found(entity: &'static str, id: DbId) -> Self {
        AppError::Core(CoreError::NotFound { entity, id })
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Core(core) => AppError::Core(core),
            StoreError::Database(db) => AppError::Database(db),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::from(err).into()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, error) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "Validation failed", msg.clone())
                }
                CoreError::NotFound { .. } => {
                    (StatusCode::NOT_FOUND, "Resource not found", core.to_string())
                }
                CoreError::Duplicate { .. } => {
                    (StatusCode::CONFLICT, "Duplicate entry", core.to_string())
                }
            },

            // --- Database errors ---
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                internal()
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "Invalid request", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        };

        (status, Json(ApiResponse::failure(message, error))).into_response()
    }
}

/// Status, message and sanitized detail for any 500.
fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal Server Error",
        "An internal error occurred".to_string(),
    )
}
