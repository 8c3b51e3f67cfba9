//! Handlers for the `/component-categories` resource.

use axum::extract::State;
use axum::http::StatusCode;
use facility_core::entities;
use facility_core::pagination::Page;
use facility_core::types::DbId;
use facility_db::models::component_category::{
    ComponentCategoryResponse, CreateComponentCategory, UpdateComponentCategory,
};
use facility_db::repositories::ComponentCategoryRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::query::PaginationParams;
use crate::response::{created, success, ApiJson, ApiResponse};
use crate::state::AppState;

/// POST /api/v1/component-categories
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateComponentCategory>,
) -> AppResult<(StatusCode, ApiJson<ComponentCategoryResponse>)> {
    let category = ComponentCategoryRepo::create(&state.pool, &input).await?;
    Ok(created("Component category created successfully", category.into()))
}

/// GET /api/v1/component-categories
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PaginationParams>,
) -> AppResult<ApiJson<Page<ComponentCategoryResponse>>> {
    let page = ComponentCategoryRepo::list(&state.pool, params.page_request()).await?;
    Ok(success(
        "Component categories retrieved successfully",
        page.map(ComponentCategoryResponse::from),
    ))
}

/// GET /api/v1/component-categories/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<ApiJson<ComponentCategoryResponse>> {
    let category = ComponentCategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(entities::COMPONENT_CATEGORY, id))?;
    Ok(success("Component category retrieved successfully", category.into()))
}

/// PUT /api/v1/component-categories/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateComponentCategory>,
) -> AppResult<ApiJson<ComponentCategoryResponse>> {
    let category = ComponentCategoryRepo::update(&state.pool, id, &input).await?;
    Ok(success("Component category updated successfully", category.into()))
}

/// DELETE /api/v1/component-categories/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<ApiJson<()>> {
    if ComponentCategoryRepo::soft_delete(&state.pool, id).await? {
        Ok(axum::Json(ApiResponse::message(
            "Component category deleted successfully",
        )))
    } else {
        Err(AppError::not_found(entities::COMPONENT_CATEGORY, id))
    }
}
