// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::dataset_store::DatasetStore;
use crate::application::random_source::seeded_source;
use crate::application::refresh_service::RefreshService;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::memory_store::InMemoryDatasetStore;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{aqi_lookup, get_dashboard, get_summary, health_check, stream_dashboard};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let app_config = load_app_config()?;
    let addr = app_config.bind_addr()?;

    // Hold the session's single dataset (infrastructure layer)
    let store: Arc<dyn DatasetStore> = Arc::new(InMemoryDatasetStore::new());

    // Generate once, then refresh on a timer (application layer)
    let refresh_service = RefreshService::new(
        store.clone(),
        Box::new(seeded_source(app_config.simulation.seed)),
        app_config.refresh_interval(),
    );
    refresh_service.initialize().await;
    let refresh_handle = refresh_service.start();

    let state = Arc::new(AppState {
        store,
        refresh_interval: refresh_service.period(),
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/dashboard", get(get_dashboard))
        .route("/dashboard/summary", get(get_summary))
        .route("/dashboard/stream", get(stream_dashboard))
        .route("/aqi/:value", get(aqi_lookup))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    tracing::info!(%addr, "Starting aqi-monitor");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if refresh_handle.is_running() {
        refresh_handle.stop();
    }
    Ok(())
}

/// Resolve on Ctrl-C. If the handler cannot be installed, log it and keep serving.
async fn shutdown_signal() {
    wait_for_shutdown(tokio::signal::ctrl_c()).await;
}

async fn wait_for_shutdown(signal: impl Future<Output = std::io::Result<()>>) {
    match signal.await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => {
            tracing::error!(error = %e, "Failed to install Ctrl-C handler, graceful shutdown disabled");
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_failed_signal_handler_keeps_serving() {
        let failed = async { Err(std::io::Error::other("no signal support")) };
        let outcome = tokio::time::timeout(Duration::from_secs(3600), wait_for_shutdown(failed)).await;
        assert!(outcome.is_err());
    }

    #[tokio::test]
    async fn test_signal_resolves_shutdown() {
        wait_for_shutdown(async { Ok(()) }).await;
    }
}
