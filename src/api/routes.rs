//! API Routes
//!
//! Configures the Axum router with all gateway endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{get_handler, health_handler, set_handler, AppState};
use crate::store::KvStore;

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /health` - Health check, independent of the store
/// - `GET /set/:key/:value` - Store a value under a key
/// - `GET /get/:key` - Retrieve a value by key
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router<S: KvStore>(state: AppState<S>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_handler))
        .route("/set/:key/:value", get(set_handler::<S>))
        .route("/get/:key", get(get_handler::<S>))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
