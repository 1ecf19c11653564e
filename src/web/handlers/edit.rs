//! Planet edit form handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};

use super::{LOAD_PLANET_FAILED, find_planet};
use crate::domain::entities::Planet;
use crate::state::AppState;
use crate::web::error::{PageError, on_failure};

/// Template for the edit form, pre-filled with the stored fields.
///
/// The form posts to `/planets/{id}?_method=PUT`.
#[derive(Template, WebTemplate)]
#[template(path = "edit.html")]
pub struct EditTemplate {
    pub planet: Planet,
}

/// Renders the edit form of a planet.
///
/// # Endpoint
///
/// `GET /planets/{id}/edit`
pub async fn edit_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<EditTemplate, PageError> {
    let planet = find_planet(&state, &id).await.map_err(on_failure(
        "Error fetching planet from database for editing",
        LOAD_PLANET_FAILED,
    ))?;

    Ok(EditTemplate { planet })
}
