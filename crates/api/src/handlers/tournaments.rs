//! Handlers for the `/tournaments` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use esports_core::enums::TOURNAMENT_STATUSES;
use esports_core::error::CoreError;
use esports_core::types::DbId;
use esports_core::validation::validate_enum;
use esports_db::models::tournament::{CreateTournament, UpdateTournament};
use esports_db::repositories::TournamentRepo;

use crate::error::{AppError, AppResult};
use crate::extract::JsonOrMultipart;
use crate::middleware::rbac::RequireAuth;
use crate::response::{self, ApiResponse};
use crate::state::AppState;
use crate::uploads::{self, TOURNAMENT_POSTER};

/// GET /api/v1/tournaments
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ApiResponse>> {
    let rows = TournamentRepo::list(&state.pool).await?;
    response::ok(&state, rows, "Tournaments retrieved successfully")
}

/// GET /api/v1/tournaments/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse>> {
    let row = TournamentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Tournament", id))?;
    response::ok(&state, row, "Tournament retrieved successfully")
}

/// GET /api/v1/tournaments/status/{status}
///
/// The status segment is validated against the known set so a typo reads
/// as a 400, not an empty list.
pub async fn list_by_status(
    State(state): State<AppState>,
    Path(status): Path<String>,
) -> AppResult<Json<ApiResponse>> {
    validate_enum("status", &status, TOURNAMENT_STATUSES)?;
    let rows = TournamentRepo::list_by_status(&state.pool, &status).await?;
    response::ok(&state, rows, "Tournaments retrieved successfully")
}

/// POST /api/v1/tournaments
///
/// Accepts JSON or multipart with an optional `poster` file.
pub async fn create(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    body: JsonOrMultipart<CreateTournament>,
) -> AppResult<(StatusCode, Json<ApiResponse>)> {
    body.payload.validate()?;

    let mut poster_url = None;
    if let Some(file) = body.file(TOURNAMENT_POSTER.field) {
        poster_url = Some(uploads::store(&state.config, &TOURNAMENT_POSTER, file).await?);
    }

    let row = TournamentRepo::create(&state.pool, &body.payload, poster_url.as_deref()).await?;
    response::created(&state, row, "Tournament created successfully")
}

/// PUT /api/v1/tournaments/{id}
///
/// Applies exactly the fields present in the payload. A request carrying
/// neither fields nor a file is rejected before touching the row.
pub async fn update(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
    body: JsonOrMultipart<UpdateTournament>,
) -> AppResult<Json<ApiResponse>> {
    body.payload.validate()?;
    let file = body.file(TOURNAMENT_POSTER.field);
    if body.payload.is_empty() && file.is_none() {
        return Err(CoreError::Validation("No fields to update".into()).into());
    }

    // Existence check before storing the file so a miss leaves nothing on disk.
    TournamentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Tournament", id))?;

    let mut poster_url = None;
    if let Some(file) = file {
        poster_url = Some(uploads::store(&state.config, &TOURNAMENT_POSTER, file).await?);
    }

    let row = TournamentRepo::update(&state.pool, id, &body.payload, poster_url.as_deref())
        .await?
        .ok_or_else(|| AppError::not_found("Tournament", id))?;

    // A replaced poster's old file stays on disk; only delete removes files.
    response::ok(&state, row, "Tournament updated successfully")
}

/// DELETE /api/v1/tournaments/{id}
///
/// The row goes first; the poster file is removed best-effort afterwards so
/// a filesystem hiccup cannot leave a row pointing at a deleted file.
pub async fn delete(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse>> {
    let row = TournamentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Tournament", id))?;

    if !TournamentRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("Tournament", id));
    }

    if let Some(path) = &row.poster_url {
        uploads::remove(&state.config, path).await;
    }

    response::ok(
        &state,
        serde_json::Value::Null,
        "Tournament deleted successfully",
    )
}
