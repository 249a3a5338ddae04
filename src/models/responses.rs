//! Response DTOs for the gateway API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Response body for `/set` and `/get`: a single-entry object `{key: value}`.
///
/// An absent value serializes as JSON `null`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValueResponse {
    pub key: String,
    pub value: Option<String>,
}

impl KeyValueResponse {
    /// Creates a KeyValueResponse
    pub fn new(key: impl Into<String>, value: Option<String>) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

impl Serialize for KeyValueResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.key, &self.value)?;
        map.end()
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    /// The fixed `{"status":"OK"}` body
    pub fn ok() -> Self {
        Self {
            status: "OK".to_string(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
