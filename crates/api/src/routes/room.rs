//! Route definitions for the `/rooms` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{component, room};
use crate::state::AppState;

/// Routes mounted at `/rooms`.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> create
/// GET    /{id}              -> get_by_id
/// PUT    /{id}              -> update
/// DELETE /{id}              -> delete
/// GET    /{id}/components   -> component::list_by_room
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(room::list).post(room::create))
        .route(
            "/{id}",
            get(room::get_by_id).put(room::update).delete(room::delete),
        )
        .route("/{id}/components", get(component::list_by_room))
}
