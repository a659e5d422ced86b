//! Route definitions for the `/gallery` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::gallery;
use crate::state::AppState;

/// Routes mounted at `/gallery`.
///
/// ```text
/// GET    /                      -> list
/// POST   /                      -> create (auth)
/// GET    /featured              -> list_featured
/// GET    /category/{category}   -> list_by_category
/// GET    /year/{year}           -> list_by_year
/// GET    /{id}                  -> get_by_id
/// PUT    /{id}                  -> update (auth)
/// DELETE /{id}                  -> delete (auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(gallery::list).post(gallery::create))
        .route("/featured", get(gallery::list_featured))
        .route("/category/{category}", get(gallery::list_by_category))
        .route("/year/{year}", get(gallery::list_by_year))
        .route(
            "/{id}",
            get(gallery::get_by_id)
                .put(gallery::update)
                .delete(gallery::delete),
        )
}
