//! Redis store
//!
//! Uses `redis::aio::ConnectionManager` for a single multiplexed async
//! connection, cloned per command. The manager is created on first use and
//! never retries: an unreachable server fails the current call immediately.

use std::time::Duration;

use redis::aio::{ConnectionManager, ConnectionManagerConfig};
use redis::RedisError;
use tokio::sync::OnceCell;
use tracing::{debug, info};

use super::KvStore;
use crate::error::{StoreError, StoreResult};

/// Upper bound on establishing the TCP connection to Redis.
const CONNECTION_TIMEOUT: Duration = Duration::from_secs(2);

/// Redis-backed [`KvStore`].
pub struct RedisStore {
    client: redis::Client,
    connection_manager: OnceCell<ConnectionManager>,
}

impl std::fmt::Debug for RedisStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisStore")
            .field("connected", &self.connection_manager.initialized())
            .finish()
    }
}

impl RedisStore {
    /// Builds a store for the Redis server at `url` without touching the network.
    ///
    /// Fails only if the URL is malformed.
    pub fn open(url: &str) -> StoreResult<Self> {
        let client = redis::Client::open(url).map_err(|e| {
            StoreError::Connection(format!("Failed to create Redis client: {}", e))
        })?;

        Ok(Self {
            client,
            connection_manager: OnceCell::new(),
        })
    }

    /// Builds a store and establishes its connection up front.
    ///
    /// Fails if the URL is malformed or the server cannot be reached.
    pub async fn connect(url: &str) -> StoreResult<Self> {
        let store = Self::open(url)?;
        store.connection().await?;
        Ok(store)
    }

    /// Whether a connection has been established yet.
    pub fn is_connected(&self) -> bool {
        self.connection_manager.initialized()
    }

    /// Returns a handle to the shared connection, connecting on first use.
    ///
    /// A failed attempt leaves the cell empty so the next call tries again.
    pub async fn connection(&self) -> StoreResult<ConnectionManager> {
        let manager = self
            .connection_manager
            .get_or_try_init(|| async {
                let config = ConnectionManagerConfig::new()
                    .set_number_of_retries(0)
                    .set_connection_timeout(CONNECTION_TIMEOUT);

                let manager = ConnectionManager::new_with_config(self.client.clone(), config)
                    .await
                    .map_err(|e| {
                        StoreError::Connection(format!("Failed to connect to Redis: {}", e))
                    })?;

                info!("Connected to Redis");
                Ok::<_, StoreError>(manager)
            })
            .await?;

        Ok(manager.clone())
    }
}

impl KvStore for RedisStore {
    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut conn = self.connection().await?;

        redis::cmd("SET")
            .arg(key)
            .arg(value)
            .query_async::<()>(&mut conn)
            .await
            .map_err(|e| command_error("SET", e))?;

        debug!(key = key, "Redis SET");
        Ok(())
    }

    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let mut conn = self.connection().await?;

        let raw: Option<Vec<u8>> = redis::cmd("GET")
            .arg(key)
            .query_async(&mut conn)
            .await
            .map_err(|e| command_error("GET", e))?;

        debug!(key = key, found = raw.is_some(), "Redis GET");

        raw.map(decode_value).transpose()
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}

/// Classifies a failed command as a connection problem or a server-side error.
fn command_error(command: &str, e: RedisError) -> StoreError {
    let message = format!("Redis {} failed: {}", command, e);
    if e.is_io_error() || e.is_connection_dropped() || e.is_connection_refusal() || e.is_timeout()
    {
        StoreError::Connection(message)
    } else {
        StoreError::Backend(message)
    }
}

/// Decodes a raw Redis bulk string as UTF-8 text.
fn decode_value(bytes: Vec<u8>) -> StoreResult<String> {
    String::from_utf8(bytes).map_err(|e| StoreError::Decode(e.to_string()))
}
