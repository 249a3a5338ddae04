//! API Module
//!
//! HTTP handlers and routing for the gateway.
//!
//! # Endpoints
//! - `GET /health` - Health check endpoint
//! - `GET /set/:key/:value` - Store a value
//! - `GET /get/:key` - Retrieve a value by key

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
