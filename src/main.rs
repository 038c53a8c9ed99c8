use anyhow::Result;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

use misunderstanding_engine::config_manager::Config;
use misunderstanding_engine::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("misunderstanding_engine=debug,tower_http=debug")),
        )
        .init();

    // CONFIG_PATH wins, otherwise the first config file found in the working directory
    let config_path = std::env::var("CONFIG_PATH").ok().or_else(|| {
        ["conf.yaml", "conf.json"]
            .into_iter()
            .find(|p| Path::new(p).exists())
            .map(str::to_string)
    });
    let config = Config::load(config_path.as_deref())?;
    match &config_path {
        Some(path) => info!("Loaded configuration from: {}", path),
        None => info!("No configuration file found, using defaults and environment"),
    }

    let addr = config.system_config.bind_address();
    let app_state = AppState::new(config)?;
    let app = build_router(app_state);

    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
