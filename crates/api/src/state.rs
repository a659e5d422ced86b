use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`. Cheaply cloneable.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: esports_db::DbPool,
    /// Server configuration (base URL, upload root, JWT settings).
    pub config: Arc<ServerConfig>,
}
