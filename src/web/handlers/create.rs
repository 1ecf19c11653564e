//! Planet creation handler.

use axum::{Form, extract::State, response::Redirect};

use crate::state::AppState;
use crate::web::error::{PageError, on_failure};
use crate::web::forms::PlanetForm;
use crate::web::routes::PLANETS_PATH;

/// Creates a planet from the submitted form and redirects to the list.
///
/// # Endpoint
///
/// `POST /planets`
///
/// # Errors
///
/// Answers `400` with the validation reason when `name` is missing or blank.
pub async fn create_handler(
    State(state): State<AppState>,
    Form(form): Form<PlanetForm>,
) -> Result<Redirect, PageError> {
    let planet = state
        .planet_service
        .create_planet(form.into_new_planet())
        .await
        .map_err(on_failure(
            "Error creating planet",
            "An error occurred when trying to create a planet.",
        ))?;

    tracing::info!(id = %planet.id, name = %planet.name, "Planet created");

    Ok(Redirect::to(PLANETS_PATH))
}
