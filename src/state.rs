//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::PlanetService;
use crate::domain::repositories::PlanetRepository;

/// Handler state.
///
/// Built once by [`crate::server::run`] (or by tests) from an explicitly
/// constructed record store; nothing here is global, so several isolated
/// instances can coexist in one process.
#[derive(Clone)]
pub struct AppState {
    pub planet_service: Arc<PlanetService>,
}

impl AppState {
    /// Creates state around the given record store.
    pub fn new(repository: Arc<dyn PlanetRepository>) -> Self {
        Self {
            planet_service: Arc::new(PlanetService::new(repository)),
        }
    }
}
