//! Request and Response models for the gateway API
//!
//! DTOs used for extracting path parameters and serializing response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{GetParams, SetParams};
pub use responses::{ErrorResponse, HealthResponse, KeyValueResponse};
