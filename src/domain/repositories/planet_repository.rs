//! Repository trait for planet data access.

use crate::domain::entities::{NewPlanet, Planet, PlanetId, PlanetUpdate};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the planet collection.
///
/// Every method is a single store call; there is no multi-step transaction to
/// coordinate and concurrent writes to the same record resolve as last write
/// wins.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgPlanetRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryPlanetRepository`] - Process-local store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlanetRepository: Send + Sync {
    /// Returns every planet in the store's natural (insertion) order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] when the store cannot be reached
    /// and [`AppError::Internal`] on other database errors.
    async fn find_all(&self) -> Result<Vec<Planet>, AppError>;

    /// Finds a planet by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Planet))` if found
    /// - `Ok(None)` if not found
    async fn find_by_id(&self, id: PlanetId) -> Result<Option<Planet>, AppError>;

    /// Inserts a new planet and returns it with its store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the store rejects the record.
    async fn create(&self, new_planet: NewPlanet) -> Result<Planet, AppError>;

    /// Overwrites the submitted fields of an existing planet.
    ///
    /// Returns `Ok(None)` if no planet has this id.
    async fn update(&self, id: PlanetId, update: PlanetUpdate)
    -> Result<Option<Planet>, AppError>;

    /// Removes a planet.
    ///
    /// Returns `Ok(true)` if a record was removed, `Ok(false)` if none matched.
    async fn delete(&self, id: PlanetId) -> Result<bool, AppError>;

    /// Verifies the store is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}
