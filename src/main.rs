use anyhow::Context;
use tracing_subscriber::EnvFilter;

use store_hours_api::{app, config, is_production, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up JWT_SECRET, DATA_DIR, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    // Initialize configuration (this loads the config singleton)
    let config = config::config().clone();
    tracing::info!("Starting Store Hours API in {:?} mode", config.environment);

    if is_production!() && config.uses_default_jwt_secret() {
        tracing::warn!("JWT_SECRET is not set; tokens are signed with the built-in default secret");
    }

    let bind_addr = config.bind_addr();
    tracing::info!(
        store_times = %config.store_times_path().display(),
        store_overwrites = %config.store_overwrites_path().display(),
        "serving data files"
    );

    let state = AppState::from_config(config).context("failed to initialize application state")?;

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Store Hours API listening on http://{}", bind_addr);

    axum::serve(listener, app(state)).await.context("server error")?;
    Ok(())
}
