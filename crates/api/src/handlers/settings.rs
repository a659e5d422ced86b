//! Handlers for the `/settings` resource.
//!
//! Settings are key-addressed. Reads are public; mutations require the
//! admin role since settings steer site-wide behavior.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use esports_core::error::CoreError;
use esports_db::models::site_setting::{CreateSiteSetting, UpdateSiteSetting};
use esports_db::repositories::SettingRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::{self, ApiResponse};
use crate::state::AppState;

fn key_not_found(key: String) -> AppError {
    AppError::Core(CoreError::KeyNotFound {
        entity: "Setting",
        key,
    })
}

/// GET /api/v1/settings
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ApiResponse>> {
    let rows = SettingRepo::list(&state.pool).await?;
    response::ok(&state, rows, "Settings retrieved successfully")
}

/// GET /api/v1/settings/{key}
pub async fn get_by_key(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<Json<ApiResponse>> {
    let row = SettingRepo::find_by_key(&state.pool, &key)
        .await?
        .ok_or_else(|| key_not_found(key))?;
    response::ok(&state, row, "Setting retrieved successfully")
}

/// POST /api/v1/settings
///
/// A duplicate key surfaces as a 409 via the unique constraint.
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_user): RequireAdmin,
    Json(input): Json<CreateSiteSetting>,
) -> AppResult<(StatusCode, Json<ApiResponse>)> {
    input.validate()?;
    let row = SettingRepo::create(&state.pool, &input).await?;
    response::created(&state, row, "Setting created successfully")
}

/// PUT /api/v1/settings/{key}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_user): RequireAdmin,
    Path(key): Path<String>,
    Json(input): Json<UpdateSiteSetting>,
) -> AppResult<Json<ApiResponse>> {
    if input.is_empty() {
        return Err(CoreError::Validation("No fields to update".into()).into());
    }
    let row = SettingRepo::update_by_key(&state.pool, &key, &input)
        .await?
        .ok_or_else(|| key_not_found(key))?;
    response::ok(&state, row, "Setting updated successfully")
}

/// DELETE /api/v1/settings/{key}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_user): RequireAdmin,
    Path(key): Path<String>,
) -> AppResult<Json<ApiResponse>> {
    if !SettingRepo::delete_by_key(&state.pool, &key).await? {
        return Err(key_not_found(key));
    }
    response::ok(
        &state,
        serde_json::Value::Null,
        "Setting deleted successfully",
    )
}
