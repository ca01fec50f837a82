//! HTTP service entry point for the KPI Engine.

use std::error::Error;

use tokio::net::TcpListener;
use tracing::info;

use kpi_engine::api::{AppState, create_router};
use kpi_engine::config::{ConfigLoader, ServerSettings};
use kpi_engine::telemetry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let _ = dotenvy::dotenv();

    let settings = ServerSettings::from_env()?;
    telemetry::init(&settings.log_level)?;

    let config = ConfigLoader::load(&settings.config_dir)?;
    info!(
        policy = %config.policy().code,
        version = %config.policy().version,
        config_dir = %settings.config_dir.display(),
        "KPI policy loaded"
    );

    let router = create_router(AppState::new(config));

    let listener = TcpListener::bind(settings.bind_address).await?;
    info!(address = %settings.bind_address, "KPI Engine listening");

    axum::serve(listener, router).await?;
    Ok(())
}
