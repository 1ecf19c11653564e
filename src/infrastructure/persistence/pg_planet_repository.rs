//! PostgreSQL implementation of planet repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewPlanet, Planet, PlanetId, PlanetUpdate};
use crate::domain::repositories::PlanetRepository;
use crate::error::AppError;

/// PostgreSQL repository for planet storage and retrieval.
///
/// Uses SQLx prepared statements with bound parameters. Every method issues a
/// single statement.
pub struct PgPlanetRepository {
    pool: Arc<PgPool>,
}

impl PgPlanetRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct PlanetRow {
    id: i64,
    name: String,
    description: Option<String>,
    image: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<PlanetRow> for Planet {
    fn from(r: PlanetRow) -> Self {
        Planet::new(
            PlanetId::new(r.id),
            r.name,
            r.description,
            r.image,
            r.created_at,
            r.updated_at,
        )
    }
}

#[async_trait]
impl PlanetRepository for PgPlanetRepository {
    async fn find_all(&self) -> Result<Vec<Planet>, AppError> {
        let rows = sqlx::query_as::<_, PlanetRow>(
            r#"
            SELECT id, name, description, image, created_at, updated_at
            FROM planets
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Planet::from).collect())
    }

    async fn find_by_id(&self, id: PlanetId) -> Result<Option<Planet>, AppError> {
        let row = sqlx::query_as::<_, PlanetRow>(
            r#"
            SELECT id, name, description, image, created_at, updated_at
            FROM planets
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Planet::from))
    }

    async fn create(&self, new_planet: NewPlanet) -> Result<Planet, AppError> {
        let row = sqlx::query_as::<_, PlanetRow>(
            r#"
            INSERT INTO planets (name, description, image)
            VALUES ($1, $2, $3)
            RETURNING id, name, description, image, created_at, updated_at
            "#,
        )
        .bind(new_planet.name)
        .bind(new_planet.description)
        .bind(new_planet.image)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn update(
        &self,
        id: PlanetId,
        update: PlanetUpdate,
    ) -> Result<Option<Planet>, AppError> {
        let update_description = update.description.is_some();
        let new_description = update.description.flatten();
        let update_image = update.image.is_some();
        let new_image = update.image.flatten();

        let row = sqlx::query_as::<_, PlanetRow>(
            r#"
            UPDATE planets SET
                name        = $2,
                description = CASE WHEN $3 THEN $4::TEXT ELSE description END,
                image       = CASE WHEN $5 THEN $6::TEXT ELSE image END,
                updated_at  = NOW()
            WHERE id = $1
            RETURNING id, name, description, image, created_at, updated_at
            "#,
        )
        .bind(id.value())
        .bind(update.name)
        .bind(update_description)
        .bind(new_description)
        .bind(update_image)
        .bind(new_image)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Planet::from))
    }

    async fn delete(&self, id: PlanetId) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM planets WHERE id = $1")
            .bind(id.value())
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
