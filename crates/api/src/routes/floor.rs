//! Route definitions for the `/floors` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{floor, room};
use crate::state::AppState;

/// Routes mounted at `/floors`.
///
/// ```text
/// GET    /                -> list
/// POST   /                -> create
/// GET    /{id}            -> get_by_id
/// PUT    /{id}            -> update
/// DELETE /{id}            -> delete
/// GET    /{id}/rooms      -> room::list_by_floor
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(floor::list).post(floor::create))
        .route(
            "/{id}",
            get(floor::get_by_id)
                .put(floor::update)
                .delete(floor::delete),
        )
        .route("/{id}/rooms", get(room::list_by_floor))
}
