//! Route definitions for the `/achievements` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::achievements;
use crate::state::AppState;

/// Routes mounted at `/achievements`.
///
/// ```text
/// GET    /                      -> list
/// POST   /                      -> create (auth)
/// GET    /category/{category}   -> list_by_category
/// GET    /year/{year}           -> list_by_year
/// GET    /{id}                  -> get_by_id
/// PUT    /{id}                  -> update (auth)
/// DELETE /{id}                  -> delete (auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(achievements::list).post(achievements::create))
        .route("/category/{category}", get(achievements::list_by_category))
        .route("/year/{year}", get(achievements::list_by_year))
        .route(
            "/{id}",
            get(achievements::get_by_id)
                .put(achievements::update)
                .delete(achievements::delete),
        )
}
