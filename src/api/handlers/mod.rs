//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod planets;

pub use health::health_handler;
pub use planets::{
    create_planet_handler, delete_planet_handler, get_planet_handler, planet_list_handler,
    update_planet_handler,
};
