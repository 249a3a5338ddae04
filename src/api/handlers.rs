//! API Handlers
//!
//! HTTP request handlers for each gateway endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use crate::error::Result;
use crate::models::{GetParams, HealthResponse, KeyValueResponse, SetParams};
use crate::store::KvStore;

/// Application state shared across all handlers.
///
/// Holds the injected store; there is no other shared state.
pub struct AppState<S> {
    pub store: Arc<S>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: KvStore> AppState<S> {
    /// Creates a new AppState owning the given store.
    pub fn new(store: S) -> Self {
        Self::from_shared(Arc::new(store))
    }

    /// Creates a new AppState around an already shared store.
    pub fn from_shared(store: Arc<S>) -> Self {
        info!(backend = store.backend_name(), "Store attached to router");
        Self { store }
    }
}

/// Handler for GET /set/:key/:value
///
/// Unconditionally writes the value and echoes `{key: value}`.
pub async fn set_handler<S: KvStore>(
    State(state): State<AppState<S>>,
    Path(params): Path<SetParams>,
) -> Result<Json<KeyValueResponse>> {
    state.store.set(&params.key, &params.value).await?;

    Ok(Json(KeyValueResponse::new(params.key, Some(params.value))))
}

/// Handler for GET /get/:key
///
/// Returns `{key: value}`, or `{key: null}` when the key is unset.
pub async fn get_handler<S: KvStore>(
    State(state): State<AppState<S>>,
    Path(params): Path<GetParams>,
) -> Result<Json<KeyValueResponse>> {
    let value = state.store.get(&params.key).await?;

    Ok(Json(KeyValueResponse::new(params.key, value)))
}

/// Handler for GET /health
///
/// Does not touch the store.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
