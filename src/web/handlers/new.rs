//! Planet creation form handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the empty creation form.
#[derive(Template, WebTemplate)]
#[template(path = "new.html")]
pub struct NewTemplate {}

/// Renders the creation form. Never touches the store.
///
/// # Endpoint
///
/// `GET /planets/new`
pub async fn new_handler() -> impl IntoResponse {
    NewTemplate {}
}
