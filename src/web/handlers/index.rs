//! Planet list page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::domain::entities::Planet;
use crate::state::AppState;
use crate::web::error::{PageError, on_failure};

/// Template for the planet list.
///
/// Renders `templates/index.html` with every stored planet.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub planets: Vec<Planet>,
}

/// Renders the list of all planets.
///
/// # Endpoint
///
/// `GET /planets`
pub async fn index_handler(State(state): State<AppState>) -> Result<IndexTemplate, PageError> {
    let planets = state.planet_service.list_planets().await.map_err(on_failure(
        "Error fetching planets from database",
        "An error occurred when trying to load planets.",
    ))?;

    Ok(IndexTemplate { planets })
}
