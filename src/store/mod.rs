//! Store Module
//!
//! The key-value capability the HTTP layer depends on, plus its implementations.

mod memory;
mod redis;

#[cfg(test)]
mod property_tests;

use std::future::Future;

use crate::error::StoreResult;

pub use self::memory::MemoryStore;
pub use self::redis::RedisStore;

// == KvStore Trait ==
/// Minimal key-value capability: unconditional set and optional get.
///
/// Implementations own their own thread-safety; the router only ever holds
/// a shared reference.
pub trait KvStore: Send + Sync + 'static {
    /// Writes `value` under `key`, overwriting any previous value. No expiration.
    fn set(&self, key: &str, value: &str) -> impl Future<Output = StoreResult<()>> + Send;

    /// Returns the current value for `key`, or `None` if it was never set.
    fn get(&self, key: &str) -> impl Future<Output = StoreResult<Option<String>>> + Send;

    /// Short name of the backend, used in logs.
    fn backend_name(&self) -> &'static str;
}
