#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use planets::domain::entities::{NewPlanet, Planet};
use planets::infrastructure::persistence::InMemoryPlanetRepository;
use planets::state::AppState;
use std::sync::Arc;

/// Builds isolated state over a fresh in-memory store.
///
/// The store handle is returned so tests can inspect it or take it offline.
pub fn create_test_state() -> (AppState, Arc<InMemoryPlanetRepository>) {
    let repository = Arc::new(InMemoryPlanetRepository::new());
    let state = AppState::new(repository.clone());
    (state, repository)
}

/// Serves the given routes over fresh in-memory state.
pub fn make_server(
    routes: Router<AppState>,
) -> (TestServer, AppState, Arc<InMemoryPlanetRepository>) {
    let (state, repository) = create_test_state();
    let server = TestServer::new(routes.with_state(state.clone())).unwrap();
    (server, state, repository)
}

pub async fn create_test_planet(
    state: &AppState,
    name: &str,
    description: Option<&str>,
    image: Option<&str>,
) -> Planet {
    state
        .planet_service
        .create_planet(NewPlanet {
            name: name.to_string(),
            description: description.map(str::to_string),
            image: image.map(str::to_string),
        })
        .await
        .unwrap()
}
