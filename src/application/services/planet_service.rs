//! Planet management service.

use crate::domain::entities::{NewPlanet, Planet, PlanetId, PlanetUpdate};
use crate::domain::repositories::PlanetRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for managing planet records.
///
/// Applies the record shape rules before anything reaches the store:
/// - `name` is trimmed and must not be blank, on create and on update
/// - Blank optional fields are stored as absent
pub struct PlanetService<R: PlanetRepository + ?Sized = dyn PlanetRepository> {
    repository: Arc<R>,
}

impl<R: PlanetRepository + ?Sized> PlanetService<R> {
    /// Creates a new planet service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists every planet, unfiltered, in store order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] or [`AppError::Internal`] on
    /// store failures.
    pub async fn list_planets(&self) -> Result<Vec<Planet>, AppError> {
        self.repository.find_all().await
    }

    /// Retrieves a planet by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the planet does not exist.
    pub async fn get_planet(&self, id: PlanetId) -> Result<Planet, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Planet not found", json!({"id": id.value()})))
    }

    /// Creates a planet from submitted fields.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `name` is missing or blank.
    pub async fn create_planet(&self, new_planet: NewPlanet) -> Result<Planet, AppError> {
        let new_planet = NewPlanet {
            name: validate_name(&new_planet.name)?,
            description: non_blank(new_planet.description),
            image: non_blank(new_planet.image),
        };

        self.repository.create(new_planet).await
    }

    /// Overwrites the submitted fields of an existing planet.
    ///
    /// The `name` rule is enforced here exactly as on create.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `name` is missing or blank.
    /// Returns [`AppError::NotFound`] if the planet does not exist.
    pub async fn update_planet(
        &self,
        id: PlanetId,
        update: PlanetUpdate,
    ) -> Result<Planet, AppError> {
        let update = PlanetUpdate {
            name: validate_name(&update.name)?,
            description: update.description.map(non_blank),
            image: update.image.map(non_blank),
        };

        self.repository
            .update(id, update)
            .await?
            .ok_or_else(|| AppError::not_found("Planet not found", json!({"id": id.value()})))
    }

    /// Deletes a planet.
    ///
    /// Returns whether a record was removed. Deleting an id that does not
    /// exist leaves the store untouched and is not an error.
    pub async fn delete_planet(&self, id: PlanetId) -> Result<bool, AppError> {
        self.repository.delete(id).await
    }

    /// Checks store connectivity.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}

/// Trims `name` and rejects blank values.
fn validate_name(name: &str) -> Result<String, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::bad_request(
            "Planet name is required",
            json!({"field": "name"}),
        ));
    }
    Ok(name.to_string())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
