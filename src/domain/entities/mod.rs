//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without persistence concerns.
//!
//! # Entity Types
//!
//! - [`Planet`] - A stored planet record
//! - [`PlanetId`] - Store-assigned opaque identifier
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with separate structs for writes:
//! - [`NewPlanet`] - For creating new records
//! - [`PlanetUpdate`] - For overwriting submitted fields of an existing record

pub mod planet;

pub use planet::{NewPlanet, ParsePlanetIdError, Planet, PlanetId, PlanetUpdate};
