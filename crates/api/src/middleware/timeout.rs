//! Per-request deadline.
//!
//! Handlers that run past `ServerConfig::request_timeout_secs` are dropped
//! and the client receives a `408` in the standard failure envelope.

use std::time::Duration;

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::response::ApiResponse;
use crate::state::AppState;

/// Run the rest of the stack under the configured deadline.
pub async fn request_timeout(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let limit = Duration::from_secs(state.config.request_timeout_secs);
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    match tokio::time::timeout(limit, next.run(request)).await {
        Ok(response) => response,
        Err(_) => {
            tracing::warn!(
                %method,
                path,
                timeout_secs = state.config.request_timeout_secs,
                "Request timed out"
            );
            timeout_response()
        }
    }
}

fn timeout_response() -> Response {
    (
        StatusCode::REQUEST_TIMEOUT,
        Json(ApiResponse::failure(
            "Request timeout",
            "The request took too long to complete",
        )),
    )
        .into_response()
}
