//! Record store implementations.
//!
//! Concrete implementations of domain repository traits.
//!
//! # Repositories
//!
//! - [`PgPlanetRepository`] - PostgreSQL storage via SQLx
//! - [`InMemoryPlanetRepository`] - Process-local storage for tests and isolated instances

pub mod memory_planet_repository;
pub mod pg_planet_repository;

pub use memory_planet_repository::InMemoryPlanetRepository;
pub use pg_planet_repository::PgPlanetRepository;
