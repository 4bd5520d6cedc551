mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads the YAML config (if any) and applies environment overrides.
pub async fn load() -> Result<Config> {
    load_from(
        env::var("CONFIG_PATH").ok(),
        Path::new(DEFAULT_CONFIG_PATH),
        |key| env::var(key).ok(),
    )
    .await
}

/// Loads from `config_path` when given (an empty path counts as unset),
/// otherwise from `default_path` if it exists, otherwise built-in defaults.
/// Overrides from `lookup` are applied last.
pub async fn load_from<F>(
    config_path: Option<String>,
    default_path: &Path,
    lookup: F,
) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let explicit_path = config_path.filter(|p| !p.is_empty());

    let mut config = match explicit_path {
        Some(path) => load_file(&path).await?,
        None if default_path.exists() => load_file(&default_path.to_string_lossy()).await?,
        None => {
            debug!("No configuration file found, using defaults");
            Config::default()
        }
    };

    config.apply_overrides(lookup)?;
    Ok(config)
}

pub async fn load_file(path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", path);

    let config_str = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

impl Config {
    /// Applies overrides from `lookup`, normally `std::env::var`. Empty values
    /// count as unset.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(url) = get("EMOTION_SERVICE_URL") {
            self.classifier.service_url = url;
        }
        if let Some(url) = get("EMOTION_DETAILED_URL") {
            self.classifier.detailed_url = Some(url);
        }
        if let Some(secs) = get("EMOTION_TIMEOUT_SECS") {
            self.classifier.timeout_secs = parse_var("EMOTION_TIMEOUT_SECS", &secs)?;
        }
        if let Some(port) = get("PORT") {
            self.demo.port = parse_var("PORT", &port)?;
        }
        if let Some(transport) = get("MCP_TRANSPORT") {
            self.mcp.transport = transport.parse().map_err(Error::config)?;
        }
        if let Some(host) = get("MCP_HOST") {
            self.mcp.host = host;
        }
        if let Some(port) = get("MCP_PORT") {
            self.mcp.port = parse_var("MCP_PORT", &port)?;
        }

        Ok(())
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, value: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    value
        .parse()
        .map_err(|e| Error::config(format!("Invalid value for {key}: '{value}' ({e})")))
}
