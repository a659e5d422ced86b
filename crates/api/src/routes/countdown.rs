//! Route definitions for the `/countdown` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::countdown;
use crate::state::AppState;

/// Routes mounted at `/countdown`.
///
/// ```text
/// GET /           -> get_active
/// PUT /           -> replace (auth)
/// GET /history    -> list_history
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(countdown::get_active).put(countdown::replace))
        .route("/history", get(countdown::list_history))
}
