//! Planet deletion handler.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::domain::entities::PlanetId;
use crate::state::AppState;
use crate::web::error::{PageError, on_failure};
use crate::web::routes::PLANETS_PATH;

/// Deletes a planet and redirects to the list.
///
/// # Endpoint
///
/// `DELETE /planets/{id}` (browsers: `POST /planets/{id}?_method=DELETE`)
///
/// Deleting an id that matches nothing, malformed ids included, is not a
/// failure: the store is left as is and the client is redirected the same way.
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect, PageError> {
    let Ok(planet_id) = id.parse::<PlanetId>() else {
        tracing::debug!(id = %id, "Delete requested for malformed planet id");
        return Ok(Redirect::to(PLANETS_PATH));
    };

    let deleted = state
        .planet_service
        .delete_planet(planet_id)
        .await
        .map_err(on_failure(
            "Error deleting planet from database",
            "An error occurred when trying to delete the planet.",
        ))?;

    if deleted {
        tracing::info!(id = %planet_id, "Planet deleted");
    } else {
        tracing::debug!(id = %planet_id, "Delete requested for unknown planet");
    }

    Ok(Redirect::to(PLANETS_PATH))
}
