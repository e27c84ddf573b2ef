use std::env;

use nz_leave_pay::api::{AppState, create_router};
use nz_leave_pay::config::ConfigLoader;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_DIR: &str = "./config/nz";
const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("nz_leave_pay=info".parse()?),
        )
        .init();

    let config_dir = env::var("LEAVE_PAY_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.into());
    let addr = env::var("LEAVE_PAY_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.into());

    let loader = ConfigLoader::load(&config_dir)?;
    tracing::info!(
        config_dir = %config_dir,
        jurisdiction = %loader.config().jurisdiction().code,
        schedules = loader.config().minimum_wages().len(),
        "Configuration loaded"
    );

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "Listening");

    axum::serve(listener, create_router(AppState::new(loader))).await?;
    Ok(())
}
