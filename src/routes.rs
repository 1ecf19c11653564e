//! Top-level router configuration combining web and API routes.
//!
//! # Route Structure
//!
//! - `/planets/*`  - HTML pages and form targets
//! - `/api/*`      - JSON API
//! - `GET /health` - Record store health check
//! - `/static/*`   - Static assets
//!
//! # Middleware
//!
//! - **Path normalization** - Trailing slash handling
//! - **Method override** - `POST ?_method=PUT|PATCH|DELETE` for HTML forms
//! - **Tracing** - Structured request/response logging

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use crate::web::middleware::method_override::{self, RewriteFn};
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower::util::MapRequest;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// The complete application service.
pub type AppService = NormalizePath<MapRequest<Router, RewriteFn>>;

/// Constructs the application with all routes and middleware.
///
/// Method override and path normalization wrap the router from the outside
/// so they take effect before a route is matched.
pub fn app_router(state: AppState) -> AppService {
    let router = Router::new()
        .merge(web::routes::routes())
        .nest("/api", api::routes::routes())
        .route("/health", get(health_handler))
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(tracing::layer());

    let router = method_override::layer().layer(router);

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
