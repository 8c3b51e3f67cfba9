pub mod building;
pub mod component;
pub mod component_category;
pub mod floor;
pub mod health;
pub mod report;
pub mod room;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                                   service and database status
///
/// /users                                    list, create
/// /users/{id}                               get, update, delete
///
/// /buildings                                list, create
/// /buildings/{id}                           get, update, delete (cascades)
/// /buildings/{id}/floors                    floors of a building
///
/// /floors                                   list (with building), create
/// /floors/{id}                              get, update, delete (cascades)
/// /floors/{id}/rooms                        rooms on a floor
///
/// /rooms                                    list (with floor and building), create
/// /rooms/{id}                               get, update, delete (cascades)
/// /rooms/{id}/components                    components in a room
///
/// /component-categories                     list, create
/// /component-categories/{id}                get, update, delete (cascades)
/// /component-categories/{id}/components     components of a category
///
/// /components                               list, create
/// /components/{id}                          get, update, delete
/// /components/{id}/assign-room              place in a room (PUT)
///
/// /reports                                  list, create
/// /reports/{id}                             get, update, delete (permanent)
/// /reports/{id}/assign-user                 assign to a user (PUT)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/users", user::router())
        .nest("/buildings", building::router())
        .nest("/floors", floor::router())
        .nest("/rooms", room::router())
        .nest("/component-categories", component_category::router())
        .nest("/components", component::router())
        .nest("/reports", report::router())
}
