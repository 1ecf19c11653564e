//! Planet page route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    create_handler, delete_handler, edit_handler, index_handler, new_handler, show_handler,
    update_handler,
};
use axum::{Router, routing::get};

/// Path of the planet list; every mutating route redirects here.
pub const PLANETS_PATH: &str = "/planets";

/// HTML routes for the planet resource.
///
/// # Endpoints
///
/// - `GET    /planets`            - List all planets
/// - `POST   /planets`            - Create a planet, redirect to list
/// - `GET    /planets/new`        - Empty creation form
/// - `GET    /planets/{id}`       - Planet detail page
/// - `PUT    /planets/{id}`       - Update a planet, redirect to list
/// - `DELETE /planets/{id}`       - Delete a planet, redirect to list
/// - `GET    /planets/{id}/edit`  - Pre-filled edit form
///
/// Browsers reach `PUT` and `DELETE` through
/// [`crate::web::middleware::method_override`].
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/planets", get(index_handler).post(create_handler))
        .route("/planets/new", get(new_handler))
        .route(
            "/planets/{id}",
            get(show_handler).put(update_handler).delete(delete_handler),
        )
        .route("/planets/{id}/edit", get(edit_handler))
}
