use emotion_mcp::{
    Result,
    config::{ClassifierConfig, Config, DemoServerConfig},
};
use std::collections::HashMap;
use tempfile::TempDir;
use tokio::fs;

/// Classifier config pointing at a mock server's `/predict`
pub fn create_classifier_config(base_uri: &str) -> ClassifierConfig {
    ClassifierConfig {
        service_url: format!("{base_uri}/predict"),
        detailed_url: None,
        timeout_secs: 5,
    }
}

pub fn create_demo_config() -> DemoServerConfig {
    DemoServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        greeting: "Hello from a Modal-deployed Go server!".to_string(),
        health_check: true,
    }
}

/// Build an env-style lookup from key/value pairs
pub fn env_lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| vars.get(key).cloned()
}

/// Config with defaults plus the given overrides applied
pub fn config_with_env(pairs: &[(&str, &str)]) -> Result<Config> {
    let mut config = Config::default();
    config.apply_overrides(env_lookup(pairs))?;
    Ok(config)
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> Result<String> {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await?;
    Ok(config_path.to_string_lossy().to_string())
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
classifier:
  service_url: "http://classifier.internal:9000/predict"
  timeout_secs: 10

mcp:
  transport: "streamable_http"
  host: "127.0.0.1"
  port: 9090

demo:
  host: "127.0.0.1"
  port: 8081
  greeting: "Hello from the smoke test"
  health_check: false

logs:
  level: "debug"
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
demo:
  port: "not-a-number"

mcp:
  transport: "carrier-pigeon"
"#;
