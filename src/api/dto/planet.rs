//! DTOs for planet endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{NewPlanet, Planet, PlanetUpdate};

/// Request body for `POST /api/planets`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePlanetRequest {
    #[validate(length(min = 1, message = "Planet name is required"))]
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl From<CreatePlanetRequest> for NewPlanet {
    fn from(req: CreatePlanetRequest) -> Self {
        NewPlanet {
            name: req.name,
            description: req.description,
            image: req.image,
        }
    }
}

/// Request body for `PUT /api/planets/{id}`.
///
/// # Optional field semantics
///
/// - **Absent** → leave existing value unchanged
/// - **`null`** → clear the field
/// - **String** → set new value
#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePlanetRequest {
    #[validate(length(min = 1, message = "Planet name is required"))]
    pub name: String,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub description: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub image: Option<Option<String>>,
}

impl From<UpdatePlanetRequest> for PlanetUpdate {
    fn from(req: UpdatePlanetRequest) -> Self {
        PlanetUpdate {
            name: req.name,
            description: req.description,
            image: req.image,
        }
    }
}

/// Individual planet information.
#[derive(Debug, Serialize)]
pub struct PlanetItem {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Planet> for PlanetItem {
    fn from(p: Planet) -> Self {
        PlanetItem {
            id: p.id.value(),
            name: p.name,
            description: p.description,
            image: p.image,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

/// Response containing the full planet collection.
#[derive(Debug, Serialize)]
pub struct PlanetListResponse {
    pub items: Vec<PlanetItem>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_update_request_distinguishes_absent_and_null() {
        let req: UpdatePlanetRequest = serde_json::from_value(json!({
            "name": "Earth",
            "description": null
        }))
        .unwrap();

        assert_eq!(req.description, Some(None));
        assert_eq!(req.image, None);
    }

    #[test]
    fn test_create_request_requires_name() {
        let req: CreatePlanetRequest = serde_json::from_value(json!({ "name": "" })).unwrap();
        assert!(req.validate().is_err());

        let req: CreatePlanetRequest =
            serde_json::from_value(json!({ "name": "Mars", "image": "mars.jpg" })).unwrap();
        assert!(req.validate().is_ok());
    }
}
