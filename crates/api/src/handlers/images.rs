//! Image-serving endpoint.
//!
//! Serves stored uploads by their relative path. The path allow-list in
//! `esports_core::images` is checked before any filesystem access, so
//! traversal attempts and paths outside the upload directories never reach
//! disk.

use axum::extract::{Path, State};
use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::response::{IntoResponse, Response};
use esports_core::error::CoreError;
use esports_core::images::{content_type_for_extension, is_allowed_path};

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::uploads;

/// Uploaded files are content-addressed (UUID names), so they never change
/// and can be cached indefinitely.
const CACHE_POLICY: &str = "public, max-age=31536000, immutable";

/// GET /api/v1/images/{*path}
pub async fn serve(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> AppResult<Response> {
    if !is_allowed_path(&path) {
        return Err(AppError::Core(CoreError::Forbidden(
            "Access to this path is not allowed".into(),
        )));
    }

    let full = uploads::resolve(&state.config, &path);
    let bytes = tokio::fs::read(&full).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            AppError::Core(CoreError::KeyNotFound {
                entity: "Image",
                key: path.clone(),
            })
        } else {
            AppError::Internal(format!("Failed to read stored file: {e}"))
        }
    })?;

    let headers = [
        (CONTENT_TYPE, content_type_for_extension(&path)),
        (CACHE_CONTROL, CACHE_POLICY),
    ];
    Ok((headers, bytes).into_response())
}
