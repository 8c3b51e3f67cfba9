use axum::extract::State;
use axum::{routing::get, Router};
use serde::Serialize;

use crate::response::{success, ApiJson};
use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the database is reachable.
    pub db_healthy: bool,
}

/// GET /health -- returns service and database health.
async fn health_check(State(state): State<AppState>) -> ApiJson<HealthResponse> {
    let db_healthy = facility_db::health_check(&state.pool).await.is_ok();
    if !db_healthy {
        tracing::warn!("Database health check failed");
    }

    let status = if db_healthy { "ok" } else { "degraded" };

    success(
        "Service is running",
        HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
        },
    )
}

/// Mount health check routes. Merged both at the root and under `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
