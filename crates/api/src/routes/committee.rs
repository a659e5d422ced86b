//! Route definitions for the `/committee` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::committee;
use crate::state::AppState;

/// Routes mounted at `/committee`.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> create (auth)
/// GET    /current       -> list_current
/// GET    /year/{year}   -> list_by_year
/// GET    /{id}          -> get_by_id
/// PUT    /{id}          -> update (auth)
/// DELETE /{id}          -> delete (auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(committee::list).post(committee::create))
        .route("/current", get(committee::list_current))
        .route("/year/{year}", get(committee::list_by_year))
        .route(
            "/{id}",
            get(committee::get_by_id)
                .put(committee::update)
                .delete(committee::delete),
        )
}
