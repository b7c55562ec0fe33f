//! Error types and error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Site-level error type
#[derive(Debug, Error)]
pub enum SiteError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Page template failed to render
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    /// I/O error (binding the listener, serving)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SiteError {
    /// Create a configuration error from a string message
    #[must_use]
    pub fn config<T: Into<String>>(msg: T) -> Self {
        Self::Config(msg.into())
    }
}

impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}
