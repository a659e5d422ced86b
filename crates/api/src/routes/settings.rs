//! Route definitions for the `/settings` resource (key-addressed).

use axum::routing::get;
use axum::Router;

use crate::handlers::settings;
use crate::state::AppState;

/// Routes mounted at `/settings`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create (admin)
/// GET    /{key}   -> get_by_key
/// PUT    /{key}   -> update (admin)
/// DELETE /{key}   -> delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(settings::list).post(settings::create))
        .route(
            "/{key}",
            get(settings::get_by_key)
                .put(settings::update)
                .delete(settings::delete),
        )
}
