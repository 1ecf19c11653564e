//! API route configuration.

use crate::api::handlers::{
    create_planet_handler, delete_planet_handler, get_planet_handler, planet_list_handler,
    update_planet_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// JSON API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `GET    /planets`        - List all planets
/// - `POST   /planets`        - Create a planet
/// - `GET    /planets/{id}`   - Fetch one planet
/// - `PUT    /planets/{id}`   - Overwrite submitted fields of a planet
/// - `DELETE /planets/{id}`   - Delete a planet
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/planets",
            get(planet_list_handler).post(create_planet_handler),
        )
        .route(
            "/planets/{id}",
            get(get_planet_handler)
                .put(update_planet_handler)
                .delete(delete_planet_handler),
        )
}
