//! Planet update handler.

use axum::{
    Form,
    extract::{Path, State},
    response::Redirect,
};

use crate::domain::entities::{Planet, PlanetId};
use crate::error::AppError;
use crate::state::AppState;
use crate::web::error::{PageError, on_failure};
use crate::web::forms::PlanetForm;
use crate::web::routes::PLANETS_PATH;

/// Overwrites the submitted fields of a planet and redirects to the list.
///
/// # Endpoint
///
/// `PUT /planets/{id}` (browsers: `POST /planets/{id}?_method=PUT`)
///
/// Fields missing from the submission keep their stored value; a submitted
/// blank `description` or `image` clears it.
pub async fn update_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<PlanetForm>,
) -> Result<Redirect, PageError> {
    let planet = update_planet(&state, &id, form).await.map_err(on_failure(
        "Error updating planet in database",
        "An error occurred when trying to update the planet.",
    ))?;

    tracing::info!(id = %planet.id, "Planet updated");

    Ok(Redirect::to(PLANETS_PATH))
}

async fn update_planet(
    state: &AppState,
    raw_id: &str,
    form: PlanetForm,
) -> Result<Planet, AppError> {
    let id: PlanetId = raw_id.parse()?;
    state
        .planet_service
        .update_planet(id, form.into_update())
        .await
}
