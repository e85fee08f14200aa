//! HTTP server initialization and runtime setup.
//!
//! Loads the catalog, wires repositories into the shared state and runs the
//! Axum server until a shutdown signal arrives.

use crate::config::Config;
use crate::domain::repositories::{BookRepository, UserRepository};
use crate::infrastructure::persistence::{MemoryBookRepository, MemoryUserRepository};
use crate::infrastructure::seed;
use crate::routes::app;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the application state from configuration.
///
/// # Errors
///
/// Returns an error if `BOOKS_FILE` is set but cannot be read or parsed.
pub async fn build_state(config: &Config) -> Result<AppState> {
    let catalog = match &config.books_file {
        Some(path) => seed::load_catalog(path).await?,
        None => seed::bundled_catalog()?,
    };
    tracing::info!("Catalog loaded: {} books", catalog.len());

    let book_repository: Arc<dyn BookRepository> =
        Arc::new(MemoryBookRepository::with_data(catalog));
    let user_repository: Arc<dyn UserRepository> = Arc::new(MemoryUserRepository::new());

    Ok(AppState::new(
        book_repository,
        user_repository,
        &config.token_signing_secret,
        config.token_ttl(),
    ))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The catalog cannot be loaded
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config).await?;

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app(state)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
