#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use facility_api::config::ServerConfig;
use facility_api::router::build_app_router;
use facility_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router, with every middleware layer, on top
/// of the given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, Body::empty()).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Body::empty()).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Body::from(json.to_string())).await
}

pub async fn put_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Body::from(json.to_string())).await
}

/// POST a JSON body and return the `data.id` of the created entity.
pub async fn create_id(pool: &PgPool, uri: &str, json: serde_json::Value) -> i64 {
    let response = post_json(build_test_app(pool.clone()), uri, json).await;
    let status = response.status();
    let body = body_json(response).await;
    assert_eq!(status, 201, "create at {uri} failed: {body}");
    body["data"]["id"].as_i64().unwrap()
}

async fn send(app: Router, method: Method, uri: &str, body: Body) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap();
    app.oneshot(request).await.unwrap()
}
