//! HTTP server initialization and runtime setup.
//!
//! Handles store connection, service wiring, and Axum server lifecycle.

use crate::config::Config;
use crate::domain::repositories::MappingStore;
use crate::infrastructure::store::{MemoryMappingStore, RedisMappingStore};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Connects the mapping store selected by the configuration.
///
/// With a Redis URL the store is Redis and a failed connection is fatal:
/// falling back to process memory would silently split the shared namespace.
/// Without one, an in-memory store is used.
///
/// # Errors
///
/// Returns an error if Redis is configured but unreachable.
pub async fn build_store(config: &Config) -> Result<Arc<dyn MappingStore>> {
    match &config.redis_url {
        Some(redis_url) => {
            let store = RedisMappingStore::connect(redis_url, config.redis_key_prefix.clone())
                .await
                .context("Failed to connect to Redis")?;
            tracing::info!("Mapping store: Redis");
            Ok(Arc::new(store))
        }
        None => {
            tracing::warn!("No Redis configured; mappings are kept in memory and lost on exit");
            Ok(Arc::new(MemoryMappingStore::new()))
        }
    }
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Mapping store (Redis or in-memory)
/// - Code generator and shorten/resolve services
/// - Axum HTTP server with graceful shutdown on Ctrl-C / SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - Redis is configured but unreachable
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = build_store(&config).await?;
    let generator = config.code_generator()?;

    let state = AppState::new(store, generator, config.collision_policy);

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
