//! Form-encoded planet submissions.

use serde::Deserialize;

use crate::domain::entities::{NewPlanet, PlanetUpdate};

/// Fields posted by the create and edit forms.
///
/// A missing `name` deserializes as empty so that it reaches the service's
/// `name` rule instead of failing body extraction. For the optional fields,
/// `None` means the field was not part of the submission.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlanetForm {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl PlanetForm {
    pub fn into_new_planet(self) -> NewPlanet {
        NewPlanet {
            name: self.name,
            description: self.description,
            image: self.image,
        }
    }

    /// Submitted fields overwrite, absent fields are kept.
    pub fn into_update(self) -> PlanetUpdate {
        PlanetUpdate {
            name: self.name,
            description: self.description.map(Some),
            image: self.image.map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_update_marks_submitted_fields() {
        let form = PlanetForm {
            name: "Earth".to_string(),
            description: Some(String::new()),
            image: None,
        };

        let update = form.into_update();
        assert_eq!(update.name, "Earth");
        assert_eq!(update.description, Some(Some(String::new())));
        assert_eq!(update.image, None);
    }
}
