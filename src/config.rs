//! Configuration Module
//!
//! Handles loading server and store settings from environment variables.

use std::env;
use std::fmt;
use std::str::FromStr;

/// Which key-value store implementation backs the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreBackend {
    /// External Redis server
    #[default]
    Redis,
    /// In-process map, for local runs without Redis
    Memory,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "redis" => Ok(StoreBackend::Redis),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(format!("unknown store backend '{}'", other)),
        }
    }
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreBackend::Redis => f.write_str("redis"),
            StoreBackend::Memory => f.write_str("memory"),
        }
    }
}

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Redis server hostname
    pub redis_host: String,
    /// Redis server port
    pub redis_port: u16,
    /// Redis logical database index
    pub redis_db: u32,
    /// Store implementation to use
    pub store_backend: StoreBackend,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 5000)
    /// - `REDIS_HOST` - Redis hostname (default: "redis")
    /// - `REDIS_PORT` - Redis port (default: 6379)
    /// - `REDIS_DB` - Redis database index (default: 0)
    /// - `STORE_BACKEND` - "redis" or "memory" (default: "redis")
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            redis_host: env::var("REDIS_HOST")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.redis_host),
            redis_port: env::var("REDIS_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.redis_port),
            redis_db: env::var("REDIS_DB")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.redis_db),
            store_backend: env::var("STORE_BACKEND")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.store_backend),
        }
    }

    /// Connection URL for the Redis client.
    pub fn redis_url(&self) -> String {
        format!(
            "redis://{}:{}/{}",
            self.redis_host, self.redis_port, self.redis_db
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 5000,
            redis_host: "redis".to_string(),
            redis_port: 6379,
            redis_db: 0,
            store_backend: StoreBackend::Redis,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 5000);
        assert_eq!(config.redis_host, "redis");
        assert_eq!(config.redis_port, 6379);
        assert_eq!(config.redis_db, 0);
        assert_eq!(config.store_backend, StoreBackend::Redis);
    }

    #[test]
    fn test_redis_url() {
        let config = Config {
            redis_host: "cache.internal".to_string(),
            redis_port: 6380,
            redis_db: 2,
            ..Config::default()
        };
        assert_eq!(config.redis_url(), "redis://cache.internal:6380/2");
    }

    #[test]
    fn test_store_backend_parse() {
        assert_eq!("redis".parse::<StoreBackend>(), Ok(StoreBackend::Redis));
        assert_eq!(" Memory ".parse::<StoreBackend>(), Ok(StoreBackend::Memory));
        assert!("postgres".parse::<StoreBackend>().is_err());
        assert_eq!(StoreBackend::Memory.to_string(), "memory");
    }

    // Env vars are process-global, so every env-driven case lives in this one test.
    #[test]
    fn test_config_from_env() {
        env::remove_var("SERVER_PORT");
        env::remove_var("REDIS_HOST");
        env::remove_var("REDIS_PORT");
        env::remove_var("REDIS_DB");
        env::remove_var("STORE_BACKEND");

        let config = Config::from_env();
        assert_eq!(config.server_port, 5000);
        assert_eq!(config.redis_host, "redis");
        assert_eq!(config.redis_url(), "redis://redis:6379/0");

        env::set_var("SERVER_PORT", "8080");
        env::set_var("REDIS_HOST", "localhost");
        env::set_var("REDIS_PORT", "not-a-port");
        env::set_var("REDIS_DB", "-1");
        env::set_var("STORE_BACKEND", "memory");

        let config = Config::from_env();
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.redis_host, "localhost");
        assert_eq!(config.redis_port, 6379);
        assert_eq!(config.redis_db, 0);
        assert_eq!(config.redis_url(), "redis://localhost:6379/0");
        assert_eq!(config.store_backend, StoreBackend::Memory);

        env::remove_var("SERVER_PORT");
        env::remove_var("REDIS_HOST");
        env::remove_var("REDIS_PORT");
        env::remove_var("REDIS_DB");
        env::remove_var("STORE_BACKEND");
    }
}
