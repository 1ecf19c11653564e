//! HTML page and form handlers for the planet resource.
//!
//! Each handler performs exactly one planet operation. Read operations render
//! a template; mutating operations redirect to [`crate::web::routes::PLANETS_PATH`].

mod create;
mod delete;
mod edit;
mod index;
mod new;
mod show;
mod update;

pub use create::create_handler;
pub use delete::delete_handler;
pub use edit::edit_handler;
pub use index::index_handler;
pub use new::new_handler;
pub use show::show_handler;
pub use update::update_handler;

use crate::domain::entities::{Planet, PlanetId};
use crate::error::AppError;
use crate::state::AppState;

/// Generic message for failed single-planet reads.
const LOAD_PLANET_FAILED: &str = "An error occurred when trying to load the planet.";

/// Resolves a raw path segment to a stored planet.
async fn find_planet(state: &AppState, raw_id: &str) -> Result<Planet, AppError> {
    let id: PlanetId = raw_id.parse()?;
    state.planet_service.get_planet(id).await
}
