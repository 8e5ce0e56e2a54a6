//! # REST API Errors
//!
//! Error types for the country routes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

/// Body sent for 5xx responses; the cause stays in the server log
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// REST API errors
#[derive(Debug, Clone, Error)]
pub enum RestError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Missing required query parameter
    #[error("Query parameter '{0}' is required")]
    MissingParam(String),

    /// Path or query could not be decoded
    #[error("{0}")]
    BadRequest(String),

    /// No route for the requested path
    #[error("Not Found")]
    RouteNotFound,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Unexpected fault while answering
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RestError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::MissingParam(_) | RestError::BadRequest(_) => StatusCode::BAD_REQUEST,
            RestError::RouteNotFound => StatusCode::NOT_FOUND,
            RestError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show the caller
    pub fn public_message(&self) -> String {
        if self.status_code().is_server_error() {
            INTERNAL_ERROR_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }
}

/// Cause of a 5xx answer, attached to the response for the access log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorCause(pub String);

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&RestError> for ErrorResponse {
    fn from(err: &RestError) -> Self {
        Self {
            error: err.public_message(),
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let mut response = (status, Json(ErrorResponse::from(&self))).into_response();
        if status.is_server_error() {
            response.extensions_mut().insert(ErrorCause(self.to_string()));
        }
        response
    }
}
