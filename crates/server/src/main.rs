//! physician-server: physician search HTTP server binary entrypoint.

use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use physician_server::config::Config;
use physician_server::db::{PgExecutor, QueryExecutor};
use physician_server::search::PhysicianSearch;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    // Load configuration
    let config = Config::from_env();
    tracing::info!(database = ?config.database, "Loaded configuration");

    // Create the process-wide connection pool
    let executor = PgExecutor::open(&config.database).expect("Failed to create database pool");

    match executor.ping().await {
        Ok(()) => tracing::info!("Database reachable"),
        Err(e) => tracing::warn!(error = %e, "Database not reachable at startup"),
    }
    tracing::info!(
        connection_limit = config.database.connection_limit,
        query_timeout_secs = config.query_timeout.as_secs(),
        diagnostics = config.diagnostics,
        "Search engine configured"
    );

    // Build application
    let search = PhysicianSearch::new(executor.clone(), config.search_options());
    let app = physician_server::build_app(search, &config);

    // Start server
    let addr: SocketAddr = config.bind_address.parse().expect("Invalid bind address");
    tracing::info!("Starting physician search server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    executor.close();
    tracing::info!("Server shutdown complete");
}

/// Wait for shutdown signal (SIGTERM or SIGINT)
async fn shutdown_signal() {
    use tokio::signal;

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
            tracing::info!("Received Ctrl+C, starting graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
