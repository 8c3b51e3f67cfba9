use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the pool is reference-counted and the config sits behind
/// an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, passed explicitly to every repository call.
    pub pool: facility_db::DbPool,
    /// Server configuration; `request_timeout_secs` drives the timeout middleware.
    pub config: Arc<ServerConfig>,
}
