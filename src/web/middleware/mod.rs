//! Middleware for browser clients.

pub mod method_override;
