//! Handlers for the `/buildings` resource.

use axum::extract::State;
use axum::http::StatusCode;
use facility_core::entities;
use facility_core::pagination::Page;
use facility_core::types::DbId;
use facility_db::models::building::{BuildingResponse, CreateBuilding, UpdateBuilding};
use facility_db::repositories::BuildingRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::query::PaginationParams;
use crate::response::{created, success, ApiJson, ApiResponse};
use crate::state::AppState;

/// POST /api/v1/buildings
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateBuilding>,
) -> AppResult<(StatusCode, ApiJson<BuildingResponse>)> {
    let building = BuildingRepo::create(&state.pool, &input).await?;
    Ok(created("Building created successfully", building.into()))
}

/// GET /api/v1/buildings
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PaginationParams>,
) -> AppResult<ApiJson<Page<BuildingResponse>>> {
    let page = BuildingRepo::list(&state.pool, params.page_request()).await?;
    Ok(success(
        "Buildings retrieved successfully",
        page.map(BuildingResponse::from),
    ))
}

/// GET /api/v1/buildings/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<ApiJson<BuildingResponse>> {
    let building = BuildingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(entities::BUILDING, id))?;
    Ok(success("Building retrieved successfully", building.into()))
}

/// PUT /api/v1/buildings/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateBuilding>,
) -> AppResult<ApiJson<BuildingResponse>> {
    let building = BuildingRepo::update(&state.pool, id, &input).await?;
    Ok(success("Building updated successfully", building.into()))
}

/// DELETE /api/v1/buildings/{id}
///
/// Soft-deletes the building and everything beneath it.
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<ApiJson<()>> {
    if BuildingRepo::soft_delete(&state.pool, id).await? {
        Ok(axum::Json(ApiResponse::message("Building deleted successfully")))
    } else {
        Err(AppError::not_found(entities::BUILDING, id))
    }
}
