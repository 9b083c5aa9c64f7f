//! User API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p user-api
//! ```
//!
//! Configuration is loaded from environment variables or a `.env` file.

use tracing::{error, info};
use user_common::{try_init_tracing_with_config, AppConfig, AppResult, Stage, TracingConfig};

#[tokio::main]
async fn main() {
    // The log format depends on the stage, so read APP_ENV before anything logs
    let _ = dotenvy::dotenv();
    let stage = std::env::var("APP_ENV")
        .map(|v| Stage::from_name(&v))
        .unwrap_or_default();

    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_stage(stage)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run().await {
        error!(code = e.error_code(), error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    info!("Starting User API Server...");

    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;

    info!(
        name = %config.app.name,
        stage = ?config.app.stage,
        address = %config.api.address(),
        "Configuration loaded"
    );

    user_api::run(config).await?;

    info!("Server stopped");
    Ok(())
}
