//! Process-local implementation of planet repository.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::entities::{NewPlanet, Planet, PlanetId, PlanetUpdate};
use crate::domain::repositories::PlanetRepository;
use crate::error::AppError;

/// In-memory planet store.
///
/// Each instance is fully isolated, which makes it the store of choice for
/// handler tests. Ids are assigned sequentially starting at 1 and are never
/// reused. The store can be marked unavailable to exercise connectivity
/// failure paths.
pub struct InMemoryPlanetRepository {
    inner: Mutex<Inner>,
}

struct Inner {
    next_id: i64,
    planets: BTreeMap<PlanetId, Planet>,
    available: bool,
}

impl InMemoryPlanetRepository {
    /// Creates an empty, reachable store.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                next_id: 1,
                planets: BTreeMap::new(),
                available: true,
            }),
        }
    }

    /// Marks the store reachable or unreachable.
    ///
    /// While unreachable every operation fails with
    /// [`AppError::StoreUnavailable`] and leaves the data untouched.
    pub fn set_available(&self, available: bool) {
        self.lock().available = available;
    }

    /// Number of stored planets.
    pub fn len(&self) -> usize {
        self.lock().planets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn connect(&self) -> Result<MutexGuard<'_, Inner>, AppError> {
        let guard = self.lock();
        if !guard.available {
            return Err(AppError::store_unavailable(
                "Record store unavailable",
                json!({"store": "memory"}),
            ));
        }
        Ok(guard)
    }
}

impl Default for InMemoryPlanetRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlanetRepository for InMemoryPlanetRepository {
    async fn find_all(&self) -> Result<Vec<Planet>, AppError> {
        let inner = self.connect()?;
        Ok(inner.planets.values().cloned().collect())
    }

    async fn find_by_id(&self, id: PlanetId) -> Result<Option<Planet>, AppError> {
        let inner = self.connect()?;
        Ok(inner.planets.get(&id).cloned())
    }

    async fn create(&self, new_planet: NewPlanet) -> Result<Planet, AppError> {
        let mut inner = self.connect()?;

        let id = PlanetId::new(inner.next_id);
        inner.next_id += 1;

        let now = Utc::now();
        let planet = Planet::new(
            id,
            new_planet.name,
            new_planet.description,
            new_planet.image,
            now,
            now,
        );
        inner.planets.insert(id, planet.clone());

        Ok(planet)
    }

    async fn update(
        &self,
        id: PlanetId,
        update: PlanetUpdate,
    ) -> Result<Option<Planet>, AppError> {
        let mut inner = self.connect()?;

        let Some(planet) = inner.planets.get_mut(&id) else {
            return Ok(None);
        };

        planet.name = update.name;
        if let Some(description) = update.description {
            planet.description = description;
        }
        if let Some(image) = update.image {
            planet.image = image;
        }
        planet.updated_at = Utc::now();

        Ok(Some(planet.clone()))
    }

    async fn delete(&self, id: PlanetId) -> Result<bool, AppError> {
        let mut inner = self.connect()?;
        Ok(inner.planets.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.connect().map(|_| ())
    }
}
