//! Handlers for the `/floors` resource.

use axum::extract::State;
use axum::http::StatusCode;
use facility_core::entities;
use facility_core::pagination::Page;
use facility_core::types::DbId;
use facility_db::models::floor::{CreateFloor, FloorResponse, UpdateFloor};
use facility_db::repositories::FloorRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::query::PaginationParams;
use crate::response::{created, success, ApiJson, ApiResponse};
use crate::state::AppState;

/// POST /api/v1/floors
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateFloor>,
) -> AppResult<(StatusCode, ApiJson<FloorResponse>)> {
    let floor = FloorRepo::create(&state.pool, &input).await?;
    Ok(created("Floor created successfully", floor.into()))
}

/// GET /api/v1/floors
///
/// Each floor embeds its building.
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PaginationParams>,
) -> AppResult<ApiJson<Page<FloorResponse>>> {
    let page = FloorRepo::list(&state.pool, params.page_request()).await?;
    Ok(success(
        "Floors retrieved successfully",
        page.map(FloorResponse::from),
    ))
}

/// GET /api/v1/buildings/{id}/floors
pub async fn list_by_building(
    State(state): State<AppState>,
    AppPath(building_id): AppPath<DbId>,
    AppQuery(params): AppQuery<PaginationParams>,
) -> AppResult<ApiJson<Page<FloorResponse>>> {
    let page = FloorRepo::list_by_building(&state.pool, building_id, params.page_request()).await?;
    Ok(success(
        "Floors retrieved successfully",
        page.map(FloorResponse::from),
    ))
}

/// GET /api/v1/floors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<ApiJson<FloorResponse>> {
    let floor = FloorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(entities::FLOOR, id))?;
    Ok(success("Floor retrieved successfully", floor.into()))
}

/// PUT /api/v1/floors/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateFloor>,
) -> AppResult<ApiJson<FloorResponse>> {
    let floor = FloorRepo::update(&state.pool, id, &input).await?;
    Ok(success("Floor updated successfully", floor.into()))
}

/// DELETE /api/v1/floors/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<ApiJson<()>> {
    if FloorRepo::soft_delete(&state.pool, id).await? {
        Ok(axum::Json(ApiResponse::message("Floor deleted successfully")))
    } else {
        Err(AppError::not_found(entities::FLOOR, id))
    }
}
