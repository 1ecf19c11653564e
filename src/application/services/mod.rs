//! Business logic services for the application layer.

pub mod planet_service;

pub use planet_service::PlanetService;
