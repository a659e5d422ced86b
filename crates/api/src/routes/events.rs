//! Route definitions for the `/events` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::events;
use crate::state::AppState;

/// Routes mounted at `/events`.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> create (auth)
/// GET    /featured          -> list_featured
/// GET    /upcoming          -> list_upcoming
/// GET    /type/{event_type} -> list_by_type
/// GET    /{id}              -> get_by_id
/// PUT    /{id}              -> update (auth)
/// DELETE /{id}              -> delete (auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(events::list).post(events::create))
        .route("/featured", get(events::list_featured))
        .route("/upcoming", get(events::list_upcoming))
        .route("/type/{event_type}", get(events::list_by_type))
        .route(
            "/{id}",
            get(events::get_by_id)
                .put(events::update)
                .delete(events::delete),
        )
}
