//! Handler for the `/stats` endpoint.

use axum::extract::State;
use axum::Json;
use esports_db::repositories::StatsRepo;

use crate::error::AppResult;
use crate::response::{self, ApiResponse};
use crate::state::AppState;

/// GET /api/v1/stats
pub async fn site_stats(State(state): State<AppState>) -> AppResult<Json<ApiResponse>> {
    let stats = StatsRepo::site_stats(&state.pool).await?;
    response::ok(&state, stats, "Statistics retrieved successfully")
}
