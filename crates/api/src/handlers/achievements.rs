//! Handlers for the `/achievements` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use esports_core::enums::ACHIEVEMENT_CATEGORIES;
use esports_core::error::CoreError;
use esports_core::types::DbId;
use esports_core::validation::validate_enum;
use esports_db::models::achievement::{CreateAchievement, UpdateAchievement};
use esports_db::repositories::AchievementRepo;

use crate::error::{AppError, AppResult};
use crate::extract::JsonOrMultipart;
use crate::middleware::rbac::RequireAuth;
use crate::response::{self, ApiResponse};
use crate::state::AppState;
use crate::uploads::{self, ACHIEVEMENT_ICON};

/// GET /api/v1/achievements
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ApiResponse>> {
    let rows = AchievementRepo::list(&state.pool).await?;
    response::ok(&state, rows, "Achievements retrieved successfully")
}

/// GET /api/v1/achievements/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse>> {
    let row = AchievementRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Achievement", id))?;
    response::ok(&state, row, "Achievement retrieved successfully")
}

/// GET /api/v1/achievements/category/{category}
pub async fn list_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> AppResult<Json<ApiResponse>> {
    validate_enum("category", &category, ACHIEVEMENT_CATEGORIES)?;
    let rows = AchievementRepo::list_by_category(&state.pool, &category).await?;
    response::ok(&state, rows, "Achievements retrieved successfully")
}

/// GET /api/v1/achievements/year/{year}
pub async fn list_by_year(
    State(state): State<AppState>,
    Path(year): Path<i32>,
) -> AppResult<Json<ApiResponse>> {
    let rows = AchievementRepo::list_by_year(&state.pool, year).await?;
    response::ok(&state, rows, "Achievements retrieved successfully")
}

/// POST /api/v1/achievements
///
/// Accepts JSON or multipart with an optional `icon` file (SVG allowed).
pub async fn create(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    body: JsonOrMultipart<CreateAchievement>,
) -> AppResult<(StatusCode, Json<ApiResponse>)> {
    body.payload.validate()?;

    let mut icon_url = None;
    if let Some(file) = body.file(ACHIEVEMENT_ICON.field) {
        icon_url = Some(uploads::store(&state.config, &ACHIEVEMENT_ICON, file).await?);
    }

    let row = AchievementRepo::create(&state.pool, &body.payload, icon_url.as_deref()).await?;
    response::created(&state, row, "Achievement created successfully")
}

/// PUT /api/v1/achievements/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
    body: JsonOrMultipart<UpdateAchievement>,
) -> AppResult<Json<ApiResponse>> {
    body.payload.validate()?;
    let file = body.file(ACHIEVEMENT_ICON.field);
    if body.payload.is_empty() && file.is_none() {
        return Err(CoreError::Validation("No fields to update".into()).into());
    }

    AchievementRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Achievement", id))?;

    let mut icon_url = None;
    if let Some(file) = file {
        icon_url = Some(uploads::store(&state.config, &ACHIEVEMENT_ICON, file).await?);
    }

    let row = AchievementRepo::update(&state.pool, id, &body.payload, icon_url.as_deref())
        .await?
        .ok_or_else(|| AppError::not_found("Achievement", id))?;

    response::ok(&state, row, "Achievement updated successfully")
}

/// DELETE /api/v1/achievements/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse>> {
    let row = AchievementRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Achievement", id))?;

    if !AchievementRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("Achievement", id));
    }

    if let Some(path) = &row.icon_url {
        uploads::remove(&state.config, path).await;
    }

    response::ok(
        &state,
        serde_json::Value::Null,
        "Achievement deleted successfully",
    )
}
