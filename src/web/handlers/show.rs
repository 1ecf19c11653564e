//! Planet detail page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};

use super::{LOAD_PLANET_FAILED, find_planet};
use crate::domain::entities::Planet;
use crate::state::AppState;
use crate::web::error::{PageError, on_failure};

/// Template for a single planet.
#[derive(Template, WebTemplate)]
#[template(path = "show.html")]
pub struct ShowTemplate {
    pub planet: Planet,
}

/// Renders the detail page of a planet.
///
/// # Endpoint
///
/// `GET /planets/{id}`
///
/// Unknown or malformed ids answer `404 Planet not found.`
pub async fn show_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ShowTemplate, PageError> {
    let planet = find_planet(&state, &id).await.map_err(on_failure(
        "Error fetching planet from database",
        LOAD_PLANET_FAILED,
    ))?;

    Ok(ShowTemplate { planet })
}
