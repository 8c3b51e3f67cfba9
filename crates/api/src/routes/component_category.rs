//! Route definitions for the `/component-categories` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{component, component_category};
use crate::state::AppState;

/// Routes mounted at `/component-categories`.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> create
/// GET    /{id}              -> get_by_id
/// PUT    /{id}              -> update
/// DELETE /{id}              -> delete
/// GET    /{id}/components   -> component::list_by_category
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(component_category::list).post(component_category::create),
        )
        .route(
            "/{id}",
            get(component_category::get_by_id)
                .put(component_category::update)
                .delete(component_category::delete),
        )
        .route("/{id}/components", get(component::list_by_category))
}
