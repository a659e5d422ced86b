//! The uniform response envelope.
//!
//! Every handler response, success or failure, is
//! `{ success, message, data, timestamp }`. Success constructors also run
//! the image URL rewriter over the payload so stored relative paths leave
//! the server as absolute URLs.

use axum::http::StatusCode;
use axum::Json;
use esports_core::images::rewrite_image_urls;
use esports_core::types::Timestamp;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Standard response envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
    pub data: serde_json::Value,
    pub timestamp: Timestamp,
}

impl ApiResponse {
    /// Failure envelope with no payload. Used by [`AppError`]'s
    /// `IntoResponse`; handlers themselves return errors, not this.
    pub fn failure(message: String) -> Self {
        Self {
            success: false,
            message,
            data: serde_json::Value::Null,
            timestamp: chrono::Utc::now(),
        }
    }
}

/// 200 envelope around `data`, with image URLs resolved.
pub fn ok<T: Serialize>(
    state: &AppState,
    data: T,
    message: &str,
) -> AppResult<Json<ApiResponse>> {
    Ok(Json(envelope(state, data, message)?))
}

/// 201 envelope around `data`, with image URLs resolved.
pub fn created<T: Serialize>(
    state: &AppState,
    data: T,
    message: &str,
) -> AppResult<(StatusCode, Json<ApiResponse>)> {
    Ok((StatusCode::CREATED, Json(envelope(state, data, message)?)))
}

fn envelope<T: Serialize>(state: &AppState, data: T, message: &str) -> AppResult<ApiResponse> {
    let mut value = serde_json::to_value(data)
        .map_err(|e| AppError::Internal(format!("Response serialization failed: {e}")))?;
    rewrite_image_urls(&mut value, &state.config.public_base_url);
    Ok(ApiResponse {
        success: true,
        message: message.to_string(),
        data: value,
        timestamp: chrono::Utc::now(),
    })
}
