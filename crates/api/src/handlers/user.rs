//! Handlers for the `/users` resource.

use axum::extract::State;
use axum::http::StatusCode;
use facility_core::entities;
use facility_core::pagination::Page;
use facility_core::types::DbId;
use facility_db::models::user::{CreateUser, UpdateUser, UserResponse};
use facility_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::query::PaginationParams;
use crate::response::{created, success, ApiJson, ApiResponse};
use crate::state::AppState;

/// POST /api/v1/users
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateUser>,
) -> AppResult<(StatusCode, ApiJson<UserResponse>)> {
    let user = UserRepo::create(&state.pool, &input).await?;
    Ok(created("User created successfully", user.into()))
}

/// GET /api/v1/users
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PaginationParams>,
) -> AppResult<ApiJson<Page<UserResponse>>> {
    let page = UserRepo::list(&state.pool, params.page_request()).await?;
    Ok(success("Users retrieved successfully", page.map(UserResponse::from)))
}

/// GET /api/v1/users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<ApiJson<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(entities::USER, id))?;
    Ok(success("User retrieved successfully", user.into()))
}

/// PUT /api/v1/users/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateUser>,
) -> AppResult<ApiJson<UserResponse>> {
    let user = UserRepo::update(&state.pool, id, &input).await?;
    Ok(success("User updated successfully", user.into()))
}

/// DELETE /api/v1/users/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<ApiJson<()>> {
    if UserRepo::soft_delete(&state.pool, id).await? {
        Ok(axum::Json(ApiResponse::message("User deleted successfully")))
    } else {
        Err(AppError::not_found(entities::USER, id))
    }
}
