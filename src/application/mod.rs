//! Application layer services implementing business logic.
//!
//! This layer applies the planet write rules and delegates storage to the
//! repository traits. HTTP handlers only talk to services.
//!
//! # Available Services
//!
//! - [`services::planet_service::PlanetService`] - Planet CRUD and the `name` rule

pub mod services;
