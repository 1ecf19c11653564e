//! Handlers for the planet JSON endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::planet::{
    CreatePlanetRequest, PlanetItem, PlanetListResponse, UpdatePlanetRequest,
};
use crate::domain::entities::PlanetId;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all planets.
///
/// # Endpoint
///
/// `GET /api/planets`
pub async fn planet_list_handler(
    State(state): State<AppState>,
) -> Result<Json<PlanetListResponse>, AppError> {
    let planets = state.planet_service.list_planets().await?;

    Ok(Json(PlanetListResponse {
        items: planets.into_iter().map(PlanetItem::from).collect(),
    }))
}

/// Returns a single planet.
///
/// # Endpoint
///
/// `GET /api/planets/{id}`
///
/// # Errors
///
/// Returns 404 if the id is malformed or unknown.
pub async fn get_planet_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<PlanetItem>, AppError> {
    let id: PlanetId = id.parse()?;
    let planet = state.planet_service.get_planet(id).await?;

    Ok(Json(planet.into()))
}

/// Creates a new planet.
///
/// # Endpoint
///
/// `POST /api/planets`
///
/// # Errors
///
/// Returns 400 if `name` is missing or blank.
pub async fn create_planet_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreatePlanetRequest>,
) -> Result<(StatusCode, Json<PlanetItem>), AppError> {
    payload.validate()?;

    let planet = state.planet_service.create_planet(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(planet.into())))
}

/// Overwrites the submitted fields of a planet.
///
/// # Endpoint
///
/// `PUT /api/planets/{id}`
///
/// `description` / `image` absent keeps the stored value, `null` clears it.
///
/// # Errors
///
/// Returns 400 if `name` is missing or blank.
/// Returns 404 if the planet does not exist.
pub async fn update_planet_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<UpdatePlanetRequest>,
) -> Result<Json<PlanetItem>, AppError> {
    let id: PlanetId = id.parse()?;
    payload.validate()?;

    let planet = state
        .planet_service
        .update_planet(id, payload.into())
        .await?;

    Ok(Json(planet.into()))
}

/// Deletes a planet.
///
/// # Endpoint
///
/// `DELETE /api/planets/{id}`
///
/// # Errors
///
/// Returns 404 if nothing was deleted.
pub async fn delete_planet_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let id: PlanetId = id.parse()?;

    if state.planet_service.delete_planet(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(
            "Planet not found",
            json!({"id": id.value()}),
        ))
    }
}
