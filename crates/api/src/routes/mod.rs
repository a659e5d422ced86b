pub mod achievements;
pub mod auth;
pub mod committee;
pub mod countdown;
pub mod events;
pub mod gallery;
pub mod health;
pub mod settings;
pub mod sponsors;
pub mod tournaments;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                       login (public)
/// /auth/register                    register (admin)
/// /auth/reset-password              reset password (admin)
/// /auth/me                          current user (auth)
///
/// /tournaments[/{id}]               CRUD; /status/{status}
/// /events[/{id}]                    CRUD; /featured, /upcoming, /type/{t}
/// /committee[/{id}]                 CRUD; /current, /year/{y}
/// /gallery[/{id}]                   CRUD; /featured, /category/{c}, /year/{y}
/// /sponsors[/{id}]                  CRUD; /active, /tier/{t}
/// /achievements[/{id}]              CRUD; /category/{c}, /year/{y}
/// /settings[/{key}]                 CRUD, key-addressed
/// /countdown                        get active, replace; /history
///
/// /stats                            aggregate counts (public)
/// /images/{*path}                   stored upload serving (public)
/// ```
///
/// Reads are public; mutations require a Bearer token (settings and user
/// management additionally require the admin role).
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/tournaments", tournaments::router())
        .nest("/events", events::router())
        .nest("/committee", committee::router())
        .nest("/gallery", gallery::router())
        .nest("/sponsors", sponsors::router())
        .nest("/achievements", achievements::router())
        .nest("/settings", settings::router())
        .nest("/countdown", countdown::router())
        .route("/stats", get(handlers::stats::site_stats))
        .route("/images/{*path}", get(handlers::images::serve))
}
