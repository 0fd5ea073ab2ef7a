//! HTTP surface of the service.
//!
//! Routes:
//! - `GET /` and `GET /health`: liveness checks
//! - `POST /stats`: full [`StatsResult`](crate::stats::StatsResult)
//! - `POST /stats/basic`: [`BasicStats`](crate::stats::BasicStats)

pub mod error;
pub mod routes;
pub mod validation;

use anyhow::Result;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::ServerConfig;

/// Shared, read-only state handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            started_at: Utc::now(),
        }
    }
}

/// Builds the application router.
pub fn router(config: ServerConfig) -> Router {
    let body_limit = config.max_body_bytes;
    Router::new()
        .route("/", get(routes::root))
        .route("/health", get(routes::health))
        .route("/stats", post(routes::stats))
        .route("/stats/basic", post(routes::basic))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(AppState::new(config))
}

/// Binds to the configured address and serves until Ctrl+C or SIGTERM.
pub async fn serve(config: ServerConfig) -> Result<()> {
    let listener = TcpListener::bind(config.bind_addr()).await?;
    serve_on(listener, config, shutdown_signal()).await
}

/// Serves on an already bound listener until `shutdown` resolves.
pub async fn serve_on<F>(listener: TcpListener, config: ServerConfig, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!(%addr, max_numbers = config.max_numbers, "Statistics API listening");

    axum::serve(listener, router(config))
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Statistics API stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
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

    info!("Shutdown signal received");
}
