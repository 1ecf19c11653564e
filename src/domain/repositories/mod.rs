//! Repository trait definitions for the domain layer.
//!
//! Traits abstract data access following the Repository pattern and are
//! implemented by concrete stores in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Testing
//!
//! See integration tests in `tests/repository_planet.rs` for usage examples.

pub mod planet_repository;

pub use planet_repository::PlanetRepository;

#[cfg(test)]
pub use planet_repository::MockPlanetRepository;
