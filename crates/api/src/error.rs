use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use esports_core::error::CoreError;

use crate::response::ApiResponse;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the standard envelope with
/// `success: false`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `esports_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Shorthand for the common "looked up by id, found nothing" case.
    pub fn not_found(entity: &'static str, id: esports_core::types::DbId) -> Self {
        AppError::Core(CoreError::NotFound { entity, id })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } | CoreError::KeyNotFound { .. } => {
                    (StatusCode::NOT_FOUND, core.to_string())
                }
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
                CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "An internal error occurred".to_string(),
                    )
                }
            },

            AppError::Database(err) => classify_sqlx_error(err),

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        (status, axum::Json(ApiResponse::failure(message))).into_response()
    }
}

/// Classify a sqlx error into an HTTP status and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (constraint name starting with `uq_`)
///   map to 409.
/// - Everything else maps to 500. The driver message is withheld unless
///   `EXPOSE_DB_ERRORS` was enabled at startup.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String) {
    match err {
        sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, "Resource not found".to_string()),
        sqlx::Error::Database(db_err) => {
            // PostgreSQL unique constraint violation: error code 23505.
            if db_err.code().as_deref() == Some("23505") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                if constraint.starts_with("uq_") {
                    return (
                        StatusCode::CONFLICT,
                        format!("Duplicate value violates unique constraint: {constraint}"),
                    );
                }
            }
            tracing::error!(error = %db_err, "Database error");
            (StatusCode::INTERNAL_SERVER_ERROR, internal_message(&db_err.to_string()))
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (StatusCode::INTERNAL_SERVER_ERROR, internal_message(&other.to_string()))
        }
    }
}

fn internal_message(detail: &str) -> String {
    if expose_db_errors() {
        format!("Database error: {detail}")
    } else {
        "An internal error occurred".to_string()
    }
}

static EXPOSE_DB_ERRORS: std::sync::OnceLock<bool> = std::sync::OnceLock::new();

/// Snapshot `ServerConfig::expose_db_errors` when the router is built, so
/// the error path is a plain load. The first writer wins.
pub(crate) fn set_expose_db_errors(flag: bool) {
    let _ = EXPOSE_DB_ERRORS.set(flag);
}

fn expose_db_errors() -> bool {
    EXPOSE_DB_ERRORS.get().copied().unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn db_error_detail_is_withheld_unless_enabled() {
        set_expose_db_errors(false);
        let (status, message) = classify_sqlx_error(&sqlx::Error::PoolTimedOut);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message, "An internal error occurred");
    }
}
