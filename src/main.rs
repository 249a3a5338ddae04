//! Redis KV Gateway - HTTP front for an external key-value store
//!
//! Exposes `/health`, `/set/:key/:value` and `/get/:key`.

use std::net::SocketAddr;

use anyhow::Context;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use redis_kv_gateway::{
    create_router, AppState, Config, KvStore, MemoryStore, RedisStore, StoreBackend,
};

/// Main entry point for the gateway.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Open the configured store (a Redis outage is logged, not fatal)
/// 4. Serve HTTP until SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "redis_kv_gateway=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Redis KV Gateway");

    let config = Config::from_env();
    info!(
        "Configuration loaded: port={}, backend={}, redis_url={}",
        config.server_port,
        config.store_backend,
        config.redis_url()
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));

    match config.store_backend {
        StoreBackend::Redis => {
            let store = RedisStore::open(&config.redis_url())
                .with_context(|| format!("Invalid Redis URL {}", config.redis_url()))?;
            // Serve regardless; /set and /get return 500 until Redis is reachable.
            if let Err(e) = store.connection().await {
                warn!(error = %e, "Redis unavailable at startup");
            }
            serve(store, addr).await
        }
        StoreBackend::Memory => serve(MemoryStore::new(), addr).await,
    }
}

/// Builds the router around `store` and serves it on `addr` until shutdown.
async fn serve<S: KvStore>(store: S, addr: SocketAddr) -> anyhow::Result<()> {
    let app = create_router(AppState::new(store));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
