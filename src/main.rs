use anyhow::Result;
use prompt_gateway::{config, inference::BedrockClient, server};
use std::sync::Arc;
use tracing::{error, info};

/// Validates that a log level string is valid
fn validate_log_level(level: &str) -> Result<()> {
    level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            anyhow::anyhow!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                level
            )
        })?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (before logging setup)
    let (config, env_file) = match config::load() {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // RUST_LOG overrides the configured level
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.server.logs.level.clone());

    if let Err(e) = validate_log_level(&log_level) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&log_level))
        .json()
        .init();

    env_file.log();
    info!("Starting prompt gateway with log level: {}", log_level);

    let client = match BedrockClient::new(&config.aws).await {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create Bedrock client: {}", e);
            std::process::exit(1);
        }
    };

    server::run(&config.server, Arc::new(client)).await?;

    Ok(())
}
