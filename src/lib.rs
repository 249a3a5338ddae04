//! Redis KV Gateway - A minimal HTTP front for an external key-value store
//!
//! Maps URL path segments directly onto store `SET` / `GET` commands.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use api::{create_router, AppState};
pub use config::{Config, StoreBackend};
pub use store::{KvStore, MemoryStore, RedisStore};
