//! Route definitions for the `/sponsors` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::sponsors;
use crate::state::AppState;

/// Routes mounted at `/sponsors`.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> create (auth)
/// GET    /active        -> list_active
/// GET    /tier/{tier}   -> list_by_tier
/// GET    /{id}          -> get_by_id
/// PUT    /{id}          -> update (auth)
/// DELETE /{id}          -> delete (auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(sponsors::list).post(sponsors::create))
        .route("/active", get(sponsors::list_active))
        .route("/tier/{tier}", get(sponsors::list_by_tier))
        .route(
            "/{id}",
            get(sponsors::get_by_id)
                .put(sponsors::update)
                .delete(sponsors::delete),
        )
}
