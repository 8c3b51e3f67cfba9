//! Handlers for the `/reports` resource.

use axum::extract::State;
use axum::http::StatusCode;
use facility_core::entities;
use facility_core::pagination::Page;
use facility_core::types::DbId;
use facility_db::models::report::{AssignUser, CreateReport, ReportResponse, UpdateReport};
use facility_db::repositories::ReportRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::query::PaginationParams;
use crate::response::{created, success, ApiJson, ApiResponse};
use crate::state::AppState;

/// POST /api/v1/reports
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateReport>,
) -> AppResult<(StatusCode, ApiJson<ReportResponse>)> {
    let report = ReportRepo::create(&state.pool, &input).await?;
    Ok(created("Report created successfully", report.into()))
}

/// GET /api/v1/reports
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PaginationParams>,
) -> AppResult<ApiJson<Page<ReportResponse>>> {
    let page = ReportRepo::list(&state.pool, params.page_request()).await?;
    Ok(success(
        "Reports retrieved successfully",
        page.map(ReportResponse::from),
    ))
}

/// GET /api/v1/reports/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<ApiJson<ReportResponse>> {
    let report = ReportRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(entities::REPORT, id))?;
    Ok(success("Report retrieved successfully", report.into()))
}

/// PUT /api/v1/reports/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateReport>,
) -> AppResult<ApiJson<ReportResponse>> {
    let report = ReportRepo::update(&state.pool, id, &input).await?;
    Ok(success("Report updated successfully", report.into()))
}

/// PUT /api/v1/reports/{id}/assign-user
pub async fn assign_user(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<AssignUser>,
) -> AppResult<ApiJson<ReportResponse>> {
    let report = ReportRepo::assign_user(&state.pool, id, input.user_id).await?;
    Ok(success("User assigned to report successfully", report.into()))
}

/// DELETE /api/v1/reports/{id}
///
/// Reports are removed permanently.
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<ApiJson<()>> {
    if ReportRepo::hard_delete(&state.pool, id).await? {
        Ok(axum::Json(ApiResponse::message("Report deleted successfully")))
    } else {
        Err(AppError::not_found(entities::REPORT, id))
    }
}
