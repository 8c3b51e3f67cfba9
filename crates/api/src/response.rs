//! Shared response envelope for API handlers.
//!
//! Every response, success or failure, has the shape
//! `{ "success": bool, "message": string, "data"?: T, "error"?: string }`.
//! Use the helpers here instead of ad-hoc `serde_json::json!` bodies.

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

/// Standard response envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    /// A successful envelope with no payload.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            error: Some(error.into()),
        }
    }
}

/// Handler return type for a `200 OK` envelope.
pub type ApiJson<T> = Json<ApiResponse<T>>;

/// `200 OK` with `data`.
pub fn success<T: Serialize>(message: &str, data: T) -> ApiJson<T> {
    Json(ApiResponse::ok(message, data))
}

/// `201 Created` with `data`.
pub fn created<T: Serialize>(message: &str, data: T) -> (StatusCode, ApiJson<T>) {
    (StatusCode::CREATED, Json(ApiResponse::ok(message, data)))
}
