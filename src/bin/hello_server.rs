use anyhow::Result;
use emotion_mcp::{config, logging, server};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
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

    info!("Starting hello server on port {}", config.demo.port);

    server::run(config.demo).await?;

    Ok(())
}
