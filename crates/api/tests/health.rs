//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Test: GET /health returns 200 with expected JSON fields
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_check_returns_ok_with_json(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["status"], "ok");
    assert!(json["data"]["version"].is_string());
    assert_eq!(json["data"]["db_healthy"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_check_is_also_served_under_api_v1(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/health").await;

    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Test: Unknown route returns 404
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_route_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn response_contains_x_request_id_header(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;

    let request_id = response.headers().get("x-request-id");
    assert!(
        request_id.is_some(),
        "Response must contain an x-request-id header"
    );

    // The value should be a UUID (36 chars with hyphens).
    let id_str = request_id.unwrap().to_str().unwrap();
    assert_eq!(id_str.len(), 36);
}
