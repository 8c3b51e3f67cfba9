//! Handlers for the `/rooms` resource.

use axum::extract::State;
use axum::http::StatusCode;
use facility_core::entities;
use facility_core::pagination::Page;
use facility_core::types::DbId;
use facility_db::models::room::{CreateRoom, RoomResponse, UpdateRoom};
use facility_db::repositories::RoomRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::query::PaginationParams;
use crate::response::{created, success, ApiJson, ApiResponse};
use crate::state::AppState;

/// POST /api/v1/rooms
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateRoom>,
) -> AppResult<(StatusCode, ApiJson<RoomResponse>)> {
    let room = RoomRepo::create(&state.pool, &input).await?;
    Ok(created("Room created successfully", room.into()))
}

/// GET /api/v1/rooms
///
/// Each room embeds its floor, which embeds its building.
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PaginationParams>,
) -> AppResult<ApiJson<Page<RoomResponse>>> {
    let page = RoomRepo::list(&state.pool, params.page_request()).await?;
    Ok(success("Rooms retrieved successfully", page.map(RoomResponse::from)))
}

/// GET /api/v1/floors/{id}/rooms
pub async fn list_by_floor(
    State(state): State<AppState>,
    AppPath(floor_id): AppPath<DbId>,
    AppQuery(params): AppQuery<PaginationParams>,
) -> AppResult<ApiJson<Page<RoomResponse>>> {
    let page = RoomRepo::list_by_floor(&state.pool, floor_id, params.page_request()).await?;
    Ok(success("Rooms retrieved successfully", page.map(RoomResponse::from)))
}

/// GET /api/v1/rooms/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<ApiJson<RoomResponse>> {
    let room = RoomRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(entities::ROOM, id))?;
    Ok(success("Room retrieved successfully", room.into()))
}

/// PUT /api/v1/rooms/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateRoom>,
) -> AppResult<ApiJson<RoomResponse>> {
    let room = RoomRepo::update(&state.pool, id, &input).await?;
    Ok(success("Room updated successfully", room.into()))
}

/// DELETE /api/v1/rooms/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<ApiJson<()>> {
    if RoomRepo::soft_delete(&state.pool, id).await? {
        Ok(axum::Json(ApiResponse::message("Room deleted successfully")))
    } else {
        Err(AppError::not_found(entities::ROOM, id))
    }
}
