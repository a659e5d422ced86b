//! Handlers for the `/sponsors` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use esports_core::enums::PARTNERSHIP_TYPES;
use esports_core::error::CoreError;
use esports_core::types::DbId;
use esports_core::validation::validate_enum;
use esports_db::models::sponsor::{CreateSponsor, UpdateSponsor};
use esports_db::repositories::SponsorRepo;

use crate::error::{AppError, AppResult};
use crate::extract::JsonOrMultipart;
use crate::middleware::rbac::RequireAuth;
use crate::response::{self, ApiResponse};
use crate::state::AppState;
use crate::uploads::{self, SPONSOR_LOGO};

/// GET /api/v1/sponsors
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ApiResponse>> {
    let rows = SponsorRepo::list(&state.pool).await?;
    response::ok(&state, rows, "Sponsors retrieved successfully")
}

/// GET /api/v1/sponsors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse>> {
    let row = SponsorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Sponsor", id))?;
    response::ok(&state, row, "Sponsor retrieved successfully")
}

/// GET /api/v1/sponsors/active
pub async fn list_active(State(state): State<AppState>) -> AppResult<Json<ApiResponse>> {
    let rows = SponsorRepo::list_active(&state.pool).await?;
    response::ok(&state, rows, "Sponsors retrieved successfully")
}

/// GET /api/v1/sponsors/tier/{tier}
pub async fn list_by_tier(
    State(state): State<AppState>,
    Path(tier): Path<String>,
) -> AppResult<Json<ApiResponse>> {
    validate_enum("partnership_type", &tier, PARTNERSHIP_TYPES)?;
    let rows = SponsorRepo::list_by_tier(&state.pool, &tier).await?;
    response::ok(&state, rows, "Sponsors retrieved successfully")
}

/// POST /api/v1/sponsors
///
/// Accepts JSON or multipart with an optional `logo` file (SVG allowed).
pub async fn create(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    body: JsonOrMultipart<CreateSponsor>,
) -> AppResult<(StatusCode, Json<ApiResponse>)> {
    body.payload.validate()?;

    let mut logo_url = None;
    if let Some(file) = body.file(SPONSOR_LOGO.field) {
        logo_url = Some(uploads::store(&state.config, &SPONSOR_LOGO, file).await?);
    }

    let row = SponsorRepo::create(&state.pool, &body.payload, logo_url.as_deref()).await?;
    response::created(&state, row, "Sponsor created successfully")
}

/// PUT /api/v1/sponsors/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
    body: JsonOrMultipart<UpdateSponsor>,
) -> AppResult<Json<ApiResponse>> {
    body.payload.validate()?;
    let file = body.file(SPONSOR_LOGO.field);
    if body.payload.is_empty() && file.is_none() {
        return Err(CoreError::Validation("No fields to update".into()).into());
    }

    SponsorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Sponsor", id))?;

    let mut logo_url = None;
    if let Some(file) = file {
        logo_url = Some(uploads::store(&state.config, &SPONSOR_LOGO, file).await?);
    }

    let row = SponsorRepo::update(&state.pool, id, &body.payload, logo_url.as_deref())
        .await?
        .ok_or_else(|| AppError::not_found("Sponsor", id))?;

    response::ok(&state, row, "Sponsor updated successfully")
}

/// DELETE /api/v1/sponsors/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse>> {
    let row = SponsorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Sponsor", id))?;

    if !SponsorRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("Sponsor", id));
    }

    if let Some(path) = &row.logo_url {
        uploads::remove(&state.config, path).await;
    }

    response::ok(
        &state,
        serde_json::Value::Null,
        "Sponsor deleted successfully",
    )
}
