use database::{config::DatabaseConfig, setup};
use log::{error, info};
use std::process::ExitCode;

/// Drops and recreates the transcript tables in the configured database
#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let config = match DatabaseConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let db = match setup::run(&config).await {
        Ok(db) => db,
        Err(e) => {
            error!("Schema setup failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    info!("Transcript schema ready in {}", config.name());

    if let Err(e) = db.close().await {
        error!("Failed to close connection: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
