//! Server-rendered HTML layer for browsers.
//!
//! Every route performs exactly one planet operation and answers with either a
//! rendered Askama template or a redirect back to the list. Failures become
//! plain-text pages (see [`error::PageError`]).
//!
//! # Modules
//!
//! - [`error`] - Plain-text failure pages
//! - [`forms`] - Form-encoded request bodies
//! - [`handlers`] - Template rendering and redirect handlers
//! - [`middleware`] - Browser-specific middleware (method override)
//! - [`routes`] - Planet page route configuration

pub mod error;
pub mod forms;
pub mod handlers;
pub mod middleware;
pub mod routes;
