//! Handlers for the `/committee` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use esports_core::error::CoreError;
use esports_core::types::DbId;
use esports_db::models::committee_member::{CreateCommitteeMember, UpdateCommitteeMember};
use esports_db::repositories::CommitteeRepo;

use crate::error::{AppError, AppResult};
use crate::extract::JsonOrMultipart;
use crate::middleware::rbac::RequireAuth;
use crate::response::{self, ApiResponse};
use crate::state::AppState;
use crate::uploads::{self, COMMITTEE_PHOTO};

/// GET /api/v1/committee
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ApiResponse>> {
    let rows = CommitteeRepo::list(&state.pool).await?;
    response::ok(&state, rows, "Committee members retrieved successfully")
}

/// GET /api/v1/committee/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse>> {
    let row = CommitteeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Committee member", id))?;
    response::ok(&state, row, "Committee member retrieved successfully")
}

/// GET /api/v1/committee/current
pub async fn list_current(State(state): State<AppState>) -> AppResult<Json<ApiResponse>> {
    let rows = CommitteeRepo::list_current(&state.pool).await?;
    response::ok(&state, rows, "Committee members retrieved successfully")
}

/// GET /api/v1/committee/year/{year}
pub async fn list_by_year(
    State(state): State<AppState>,
    Path(year): Path<i32>,
) -> AppResult<Json<ApiResponse>> {
    let rows = CommitteeRepo::list_by_year(&state.pool, year).await?;
    response::ok(&state, rows, "Committee members retrieved successfully")
}

/// POST /api/v1/committee
///
/// Accepts JSON or multipart with an optional `image` file.
pub async fn create(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    body: JsonOrMultipart<CreateCommitteeMember>,
) -> AppResult<(StatusCode, Json<ApiResponse>)> {
    body.payload.validate()?;

    let mut image_url = None;
    if let Some(file) = body.file(COMMITTEE_PHOTO.field) {
        image_url = Some(uploads::store(&state.config, &COMMITTEE_PHOTO, file).await?);
    }

    let row = CommitteeRepo::create(&state.pool, &body.payload, image_url.as_deref()).await?;
    response::created(&state, row, "Committee member created successfully")
}

/// PUT /api/v1/committee/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
    body: JsonOrMultipart<UpdateCommitteeMember>,
) -> AppResult<Json<ApiResponse>> {
    let file = body.file(COMMITTEE_PHOTO.field);
    if body.payload.is_empty() && file.is_none() {
        return Err(CoreError::Validation("No fields to update".into()).into());
    }

    CommitteeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Committee member", id))?;

    let mut image_url = None;
    if let Some(file) = file {
        image_url = Some(uploads::store(&state.config, &COMMITTEE_PHOTO, file).await?);
    }

    let row = CommitteeRepo::update(&state.pool, id, &body.payload, image_url.as_deref())
        .await?
        .ok_or_else(|| AppError::not_found("Committee member", id))?;

    response::ok(&state, row, "Committee member updated successfully")
}

/// DELETE /api/v1/committee/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse>> {
    let row = CommitteeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Committee member", id))?;

    if !CommitteeRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("Committee member", id));
    }

    if let Some(path) = &row.image_url {
        uploads::remove(&state.config, path).await;
    }

    response::ok(
        &state,
        serde_json::Value::Null,
        "Committee member deleted successfully",
    )
}
