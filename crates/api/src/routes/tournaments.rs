//! Route definitions for the `/tournaments` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::tournaments;
use crate::state::AppState;

/// Routes mounted at `/tournaments`.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> create (auth)
/// GET    /status/{status}   -> list_by_status
/// GET    /{id}              -> get_by_id
/// PUT    /{id}              -> update (auth)
/// DELETE /{id}              -> delete (auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tournaments::list).post(tournaments::create))
        .route("/status/{status}", get(tournaments::list_by_status))
        .route(
            "/{id}",
            get(tournaments::get_by_id)
                .put(tournaments::update)
                .delete(tournaments::delete),
        )
}
