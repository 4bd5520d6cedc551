use anyhow::Result;
use emotion_mcp::{
    classifier::HttpEmotionClient,
    config, logging,
    mcp::{self, EmotionServer},
};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // RUST_LOG directives take precedence over the configured level
    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = match logging::build_filter(rust_log.as_deref(), &config.logs.level) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    logging::init(filter);

    info!(
        "Starting emotion MCP server with log level: {}",
        config.logs.level
    );

    let client = HttpEmotionClient::new(config.classifier.clone())?;
    info!(
        "Emotion service: {} (detailed: {})",
        client.service_url(),
        client.detailed_url()
    );

    let server = EmotionServer::new(Arc::new(client));
    mcp::serve(server, &config.mcp).await?;

    Ok(())
}
