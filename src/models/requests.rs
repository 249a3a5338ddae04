//! Request DTOs for the gateway API
//!
//! All input arrives as URL path segments; these structs are what the
//! `Path` extractor deserializes them into.

use serde::Deserialize;

/// Path parameters for `GET /set/:key/:value`
#[derive(Debug, Clone, Deserialize)]
pub struct SetParams {
    /// The store key, verbatim
    pub key: String,
    /// The value to store, verbatim
    pub value: String,
}

/// Path parameters for `GET /get/:key`
#[derive(Debug, Clone, Deserialize)]
pub struct GetParams {
    pub key: String,
}
