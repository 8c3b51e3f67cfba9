//! Route definitions for the `/reports` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::report;
use crate::state::AppState;

/// Routes mounted at `/reports`.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> create
/// GET    /{id}              -> get_by_id
/// PUT    /{id}              -> update
/// DELETE /{id}              -> delete
/// PUT    /{id}/assign-user  -> assign_user
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(report::list).post(report::create))
        .route(
            "/{id}",
            get(report::get_by_id)
                .put(report::update)
                .delete(report::delete),
        )
        .route("/{id}/assign-user", put(report::assign_user))
}
