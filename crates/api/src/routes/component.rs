//! Route definitions for the `/components` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::component;
use crate::state::AppState;

/// Routes mounted at `/components`.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> create
/// GET    /{id}              -> get_by_id
/// PUT    /{id}              -> update
/// DELETE /{id}              -> delete
/// PUT    /{id}/assign-room  -> assign_room
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(component::list).post(component::create))
        .route(
            "/{id}",
            get(component::get_by_id)
                .put(component::update)
                .delete(component::delete),
        )
        .route("/{id}/assign-room", put(component::assign_room))
}
