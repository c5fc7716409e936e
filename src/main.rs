//! Driver Registry API - Main Entry Point

use std::sync::Arc;

use axum::extract::Request;
use axum::ServiceExt;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use driver_registry::infrastructure::driven_adapters::config::{AppConfig, LoggingConfig};
use driver_registry::infrastructure::driven_adapters::database;
use driver_registry::infrastructure::driven_adapters::driver_repository::PostgresDriverRepository;
use driver_registry::infrastructure::driving_adapters::api_rest::{self, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration first so logging can honour it
    let config = AppConfig::load()?;
    init_tracing(&config.logging);
    tracing::info!("Configuration loaded successfully");

    // Create database connection pool
    let pool = database::create_pool(&config.database).await?;
    tracing::info!("Database connection pool created");

    if config.database.run_migrations {
        database::run_migrations(&pool).await?;
        tracing::info!("Database migrations completed");
    }

    let driver_repository = Arc::new(PostgresDriverRepository::new(pool.clone()));
    let app = api_rest::app(AppState::new(driver_repository));

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| logging.filter.as_str().into());
    let registry = tracing_subscriber::registry().with(filter);

    if logging.json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[cfg(unix)]
async fn shutdown_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let (Ok(mut interrupt), Ok(mut terminate)) = (
        signal(SignalKind::interrupt()),
        signal(SignalKind::terminate()),
    ) else {
        tracing::error!("Failed to install signal handlers, graceful shutdown disabled");
        return std::future::pending().await;
    };

    tokio::select! {
        _ = interrupt.recv() => tracing::info!("Received SIGINT, shutting down"),
        _ = terminate.recv() => tracing::info!("Received SIGTERM, shutting down"),
    }
}

#[cfg(not(unix))]
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::error!("Failed to install CTRL+C handler, graceful shutdown disabled");
        std::future::pending::<()>().await;
    }
    tracing::info!("Received CTRL+C, shutting down");
}
