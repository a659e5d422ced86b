//! Handlers for the `/events` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use esports_core::error::CoreError;
use esports_core::types::DbId;
use esports_db::models::event::{CreateEvent, UpdateEvent};
use esports_db::repositories::EventRepo;

use crate::error::{AppError, AppResult};
use crate::extract::JsonOrMultipart;
use crate::middleware::rbac::RequireAuth;
use crate::response::{self, ApiResponse};
use crate::state::AppState;
use crate::uploads::{self, EVENT_POSTER};

/// GET /api/v1/events
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ApiResponse>> {
    let rows = EventRepo::list(&state.pool).await?;
    response::ok(&state, rows, "Events retrieved successfully")
}

/// GET /api/v1/events/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse>> {
    let row = EventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Event", id))?;
    response::ok(&state, row, "Event retrieved successfully")
}

/// GET /api/v1/events/featured
pub async fn list_featured(State(state): State<AppState>) -> AppResult<Json<ApiResponse>> {
    let rows = EventRepo::list_featured(&state.pool).await?;
    response::ok(&state, rows, "Events retrieved successfully")
}

/// GET /api/v1/events/upcoming
pub async fn list_upcoming(State(state): State<AppState>) -> AppResult<Json<ApiResponse>> {
    let rows = EventRepo::list_upcoming(&state.pool).await?;
    response::ok(&state, rows, "Events retrieved successfully")
}

/// GET /api/v1/events/type/{event_type}
pub async fn list_by_type(
    State(state): State<AppState>,
    Path(event_type): Path<String>,
) -> AppResult<Json<ApiResponse>> {
    let rows = EventRepo::list_by_type(&state.pool, &event_type).await?;
    response::ok(&state, rows, "Events retrieved successfully")
}

/// POST /api/v1/events
///
/// Accepts JSON or multipart with an optional `poster` file.
pub async fn create(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    body: JsonOrMultipart<CreateEvent>,
) -> AppResult<(StatusCode, Json<ApiResponse>)> {
    body.payload.validate()?;

    let mut poster_url = None;
    if let Some(file) = body.file(EVENT_POSTER.field) {
        poster_url = Some(uploads::store(&state.config, &EVENT_POSTER, file).await?);
    }

    let row = EventRepo::create(&state.pool, &body.payload, poster_url.as_deref()).await?;
    response::created(&state, row, "Event created successfully")
}

/// PUT /api/v1/events/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
    body: JsonOrMultipart<UpdateEvent>,
) -> AppResult<Json<ApiResponse>> {
    let file = body.file(EVENT_POSTER.field);
    if body.payload.is_empty() && file.is_none() {
        return Err(CoreError::Validation("No fields to update".into()).into());
    }

    EventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Event", id))?;

    let mut poster_url = None;
    if let Some(file) = file {
        poster_url = Some(uploads::store(&state.config, &EVENT_POSTER, file).await?);
    }

    let row = EventRepo::update(&state.pool, id, &body.payload, poster_url.as_deref())
        .await?
        .ok_or_else(|| AppError::not_found("Event", id))?;

    response::ok(&state, row, "Event updated successfully")
}

/// DELETE /api/v1/events/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse>> {
    let row = EventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Event", id))?;

    if !EventRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("Event", id));
    }

    if let Some(path) = &row.poster_url {
        uploads::remove(&state.config, path).await;
    }

    response::ok(&state, serde_json::Value::Null, "Event deleted successfully")
}
