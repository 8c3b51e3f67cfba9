//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values, so no server or
//! database is needed.

use assert_matches::assert_matches;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use facility_api::error::AppError;
use facility_core::error::CoreError;
use facility_db::error::StoreError;
use http_body_util::BodyExt;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Domain errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_error_returns_404_envelope() {
    let err = AppError::not_found("building", 42);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "building not found");
    assert!(json.get("data").is_none());
}

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation("code and name are required".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Validation failed");
    assert_eq!(json["error"], "code and name are required");
}

#[tokio::test]
async fn duplicate_error_returns_409() {
    let err = AppError::Core(CoreError::Duplicate {
        entity: "user",
        field: "email",
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"], "user with this email already exists");
}

// ---------------------------------------------------------------------------
// HTTP-specific errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("invalid field value".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "invalid field value");
}

#[tokio::test]
async fn internal_error_returns_500_and_sanitizes_message() {
    let err = AppError::InternalError("secret database credentials leaked".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], "Internal Server Error");
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn database_error_returns_500_and_sanitizes_message() {
    let err = AppError::Database(sqlx::Error::PoolTimedOut);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "An internal error occurred");
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

#[test]
fn store_domain_error_stays_a_domain_error() {
    let err: AppError = StoreError::Core(CoreError::NotFound {
        entity: "room",
        id: 1,
    })
    .into();

    assert_matches!(err, AppError::Core(CoreError::NotFound { entity: "room", id: 1 }));
}

#[test]
fn raw_sqlx_error_becomes_database_error() {
    let err: AppError = sqlx::Error::RowNotFound.into();

    assert_matches!(err, AppError::Database(_));
}
