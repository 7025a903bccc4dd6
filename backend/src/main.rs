//! Herb Trace Platform server binary

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use herb_trace_backend::{create_app, error::AppError, AppState, Config, DataStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    // Initialize tracing; production logs are JSON lines
    let json_logs = config.is_production();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "herb_trace_server=debug,herb_trace_backend=debug,tower_http=debug".into()
            }),
        )
        .with(json_logs.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json_logs).then(|| tracing_subscriber::fmt::layer()))
        .init();

    config.validate().map_err(AppError::Configuration)?;

    tracing::info!("Starting Herb Trace Platform Server");
    tracing::info!("Environment: {}", config.environment);

    tracing::info!("Loading records from {}", config.data.seed_path);
    let store = DataStore::load(&config.data.seed_path)
        .await
        .with_context(|| format!("failed to load seed data from {}", config.data.seed_path))?;
    tracing::info!(
        farms = store.farms().len(),
        plants = store.plants().len(),
        packages = store.packages().len(),
        "Records loaded"
    );

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .with_context(|| {
            format!(
                "invalid listen address {}:{}",
                config.server.host, config.server.port
            )
        })?;

    // Create application state
    let state = AppState {
        store: Arc::new(store),
        config: Arc::new(config),
    };

    let app = create_app(state);

    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
