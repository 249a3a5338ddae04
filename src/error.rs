//! Error types for the gateway
//!
//! Store failures are surfaced to HTTP callers as a 500 with a JSON body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Store Error Enum ==
/// Errors raised by a key-value store backend.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to reach or connect to the store
    #[error("Store connection error: {0}")]
    Connection(String),

    /// The store rejected or failed a command
    #[error("Store backend error: {0}")]
    Backend(String),

    /// A stored value could not be decoded as text
    #[error("Store decode error: {0}")]
    Decode(String),
}

/// Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

// == API Error Enum ==
/// Error type returned by HTTP handlers.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The backing store failed the request
    #[error(transparent)]
    Store(#[from] StoreError),
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        tracing::error!(error = %self, "Request failed");

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for HTTP handlers.
pub type Result<T> = std::result::Result<T, ApiError>;
