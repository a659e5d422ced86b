//! Handlers for the `/countdown` resource.
//!
//! The countdown banner is a singleton with history: GET returns the active
//! row, PUT replaces it (deactivate-all + insert, transactionally).

use axum::extract::State;
use axum::Json;
use esports_db::models::countdown_setting::ReplaceCountdown;
use esports_db::repositories::CountdownRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAuth;
use crate::response::{self, ApiResponse};
use crate::state::AppState;

/// GET /api/v1/countdown
///
/// `data` is the active row, or null when no countdown is active.
pub async fn get_active(State(state): State<AppState>) -> AppResult<Json<ApiResponse>> {
    let row = CountdownRepo::find_active(&state.pool).await?;
    response::ok(&state, row, "Countdown retrieved successfully")
}

/// GET /api/v1/countdown/history
pub async fn list_history(State(state): State<AppState>) -> AppResult<Json<ApiResponse>> {
    let rows = CountdownRepo::list(&state.pool).await?;
    response::ok(&state, rows, "Countdown history retrieved successfully")
}

/// PUT /api/v1/countdown
///
/// Replaces the active countdown rather than mutating it in place.
pub async fn replace(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Json(input): Json<ReplaceCountdown>,
) -> AppResult<Json<ApiResponse>> {
    input.validate()?;
    let row = CountdownRepo::replace_active(&state.pool, &input).await?;
    response::ok(&state, row, "Countdown updated successfully")
}
