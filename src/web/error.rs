//! Plain-text failure pages for the HTML routes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::AppError;

/// Message shown when a planet id does not resolve to a record.
pub const NOT_FOUND_MESSAGE: &str = "Planet not found.";

/// A failed page request, answered as `text/plain`.
///
/// The status follows the [`AppError`] kind. Store and internal failures
/// carry only the per-operation message; the cause goes to the logs.
#[derive(Debug)]
pub struct PageError {
    status: StatusCode,
    message: String,
}

impl PageError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Converts a service error, using `failure_message` for store and
    /// internal failures.
    pub fn from_app_error(err: &AppError, failure_message: &str) -> Self {
        let message = match err {
            AppError::NotFound { .. } => NOT_FOUND_MESSAGE.to_string(),
            AppError::Validation { message, .. } => format!("{message}."),
            AppError::StoreUnavailable { .. } | AppError::Internal { .. } => {
                failure_message.to_string()
            }
        };
        Self::new(err.status(), message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}

/// Builds a `map_err` adapter that logs the failure under `context` and turns
/// it into a [`PageError`].
///
/// Not-found and validation outcomes are logged at `WARN`; store and internal
/// failures at `ERROR`.
pub fn on_failure(
    context: &'static str,
    failure_message: &'static str,
) -> impl FnOnce(AppError) -> PageError {
    move |err| {
        match &err {
            AppError::NotFound { details, .. } | AppError::Validation { details, .. } => {
                tracing::warn!(error = %err, %details, "{}", context);
            }
            AppError::StoreUnavailable { details, .. } | AppError::Internal { details, .. } => {
                tracing::error!(error = %err, %details, "{}", context);
            }
        }
        PageError::from_app_error(&err, failure_message)
    }
}
