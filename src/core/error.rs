//! Typed error handling for the blog backend
//!
//! Every failure a handler can produce is a [`BlogError`]. Each variant maps
//! to one HTTP status and renders as a JSON body of the form
//! `{"message": "..."}`, with one fixed message per failure kind.
//!
//! # Error Categories
//!
//! - [`ValidationError`]: rejected query parameters or request bodies (400)
//! - [`BlogError::NotFound`]: unknown post id (404)
//! - [`BlogError::Storage`]: backing store could not be read or written (500)

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// The main error type of the backend
#[derive(Debug, thiserror::Error)]
pub enum BlogError {
    /// Request parameters or body were rejected
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No post carries the requested id
    ///
    /// The id is kept as the raw path segment so that non-numeric ids
    /// report exactly what the client sent.
    #[error("Post with id {id} not found")]
    NotFound { id: String },

    /// The storage backend failed to load or save the collection
    #[error("Storage error: {0:#}")]
    Storage(anyhow::Error),
}

/// Validation failures, one fixed message each
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid sort field. Valid fields are 'title', 'content', 'author' and 'date'.")]
    InvalidSortField,

    #[error("Invalid sort direction. Valid directions are 'asc' and 'desc'.")]
    InvalidSortDirection,

    #[error("Title, content and author are required")]
    MissingRequiredFields,

    #[error("Field '{field}' must be a non-empty string")]
    InvalidField { field: &'static str },

    #[error("Request body must be a JSON object")]
    InvalidBody,

    #[error("Invalid query string")]
    InvalidQuery,
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub message: String,
}

impl BlogError {
    /// Shorthand for a not-found error on a numeric id
    pub fn not_found(id: u64) -> Self {
        BlogError::NotFound { id: id.to_string() }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            BlogError::Validation(_) => StatusCode::BAD_REQUEST,
            BlogError::NotFound { .. } => StatusCode::NOT_FOUND,
            BlogError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            message: self.to_string(),
        }
    }
}

impl IntoResponse for BlogError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(self.to_response())).into_response()
    }
}
