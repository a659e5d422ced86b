//! Route definitions for the `/auth` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/auth`.
///
/// ```text
/// POST /login           -> login (public)
/// POST /register        -> register (admin)
/// POST /reset-password  -> reset_password (admin)
/// GET  /me              -> me (auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/register", post(auth::register))
        .route("/reset-password", post(auth::reset_password))
        .route("/me", get(auth::me))
}
