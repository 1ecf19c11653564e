//! Planet entity and its write-side inputs.

use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

/// Store-assigned identifier of a planet.
///
/// Opaque to callers: it is only ever produced by the store and round-tripped
/// through URLs via its [`Display`](fmt::Display) / [`FromStr`] forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlanetId(i64);

impl PlanetId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for PlanetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Returned when a path segment is not a well-formed planet id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed planet id: {input:?}")]
pub struct ParsePlanetIdError {
    input: String,
}

impl ParsePlanetIdError {
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for PlanetId {
    type Err = ParsePlanetIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<i64>() {
            Ok(value) if value > 0 => Ok(Self(value)),
            _ => Err(ParsePlanetIdError {
                input: s.to_string(),
            }),
        }
    }
}

/// A planet record as held by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    pub id: PlanetId,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Planet {
    /// Creates a new Planet instance.
    pub fn new(
        id: PlanetId,
        name: String,
        description: Option<String>,
        image: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            image,
            created_at,
            updated_at,
        }
    }
}

/// Input data for creating a new planet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlanet {
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
}

/// Submitted fields for overwriting an existing planet.
///
/// `name` is always overwritten. For the optional fields `None` leaves the
/// stored value unchanged, `Some(None)` clears it and `Some(Some(v))` sets it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanetUpdate {
    pub name: String,
    pub description: Option<Option<String>>,
    pub image: Option<Option<String>>,
}
