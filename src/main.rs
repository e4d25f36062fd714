//! # User Registry
//!
//! Entry point that initializes:
//! - Tracing/logging subsystem
//! - Configuration loading
//! - The configured user store
//! - HTTP server

use anyhow::Result;
use tracing::info;

use user_registry::config::Settings;
use user_registry::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for structured logging
    user_registry::telemetry::init_tracing();

    info!("Starting User Registry...");

    // Load configuration from environment and config files
    let settings = Settings::load()?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        environment = %settings.environment,
        backend = ?settings.database.backend,
        "Configuration loaded"
    );

    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
