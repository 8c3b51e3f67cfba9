//! Handlers for the `/components` resource.

use axum::extract::State;
use axum::http::StatusCode;
use facility_core::entities;
use facility_core::pagination::Page;
use facility_core::types::DbId;
use facility_db::models::component::{
    AssignRoom, ComponentResponse, CreateComponent, UpdateComponent,
};
use facility_db::repositories::ComponentRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::query::PaginationParams;
use crate::response::{created, success, ApiJson, ApiResponse};
use crate::state::AppState;

/// POST /api/v1/components
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateComponent>,
) -> AppResult<(StatusCode, ApiJson<ComponentResponse>)> {
    let component = ComponentRepo::create(&state.pool, &input).await?;
    Ok(created("Component created successfully", component.into()))
}

/// GET /api/v1/components
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PaginationParams>,
) -> AppResult<ApiJson<Page<ComponentResponse>>> {
    let page = ComponentRepo::list(&state.pool, params.page_request()).await?;
    Ok(success(
        "Components retrieved successfully",
        page.map(ComponentResponse::from),
    ))
}

/// GET /api/v1/rooms/{id}/components
pub async fn list_by_room(
    State(state): State<AppState>,
    AppPath(room_id): AppPath<DbId>,
    AppQuery(params): AppQuery<PaginationParams>,
) -> AppResult<ApiJson<Page<ComponentResponse>>> {
    let page = ComponentRepo::list_by_room(&state.pool, room_id, params.page_request()).await?;
    Ok(success(
        "Components retrieved successfully",
        page.map(ComponentResponse::from),
    ))
}

/// GET /api/v1/component-categories/{id}/components
pub async fn list_by_category(
    State(state): State<AppState>,
    AppPath(category_id): AppPath<DbId>,
    AppQuery(params): AppQuery<PaginationParams>,
) -> AppResult<ApiJson<Page<ComponentResponse>>> {
    let page =
        ComponentRepo::list_by_category(&state.pool, category_id, params.page_request()).await?;
    Ok(success(
        "Components retrieved successfully",
        page.map(ComponentResponse::from),
    ))
}

/// GET /api/v1/components/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<ApiJson<ComponentResponse>> {
    let component = ComponentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(entities::COMPONENT, id))?;
    Ok(success("Component retrieved successfully", component.into()))
}

/// PUT /api/v1/components/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateComponent>,
) -> AppResult<ApiJson<ComponentResponse>> {
    let component = ComponentRepo::update(&state.pool, id, &input).await?;
    Ok(success("Component updated successfully", component.into()))
}

/// PUT /api/v1/components/{id}/assign-room
pub async fn assign_room(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<AssignRoom>,
) -> AppResult<ApiJson<ComponentResponse>> {
    let component = ComponentRepo::assign_room(&state.pool, id, input.room_id).await?;
    Ok(success("Room assigned to component successfully", component.into()))
}

/// DELETE /api/v1/components/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<ApiJson<()>> {
    if ComponentRepo::soft_delete(&state.pool, id).await? {
        Ok(axum::Json(ApiResponse::message("Component deleted successfully")))
    } else {
        Err(AppError::not_found(entities::COMPONENT, id))
    }
}
