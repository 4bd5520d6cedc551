use serde::{Deserialize, Serialize};

pub const DEFAULT_SERVICE_URL: &str = "http://localhost:8000/predict";
pub const DEFAULT_DETAILED_URL: &str = "http://localhost:8000/predict_detailed";
const PREDICT_SUFFIX: &str = "/predict";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub classifier: ClassifierConfig,
    #[serde(default)]
    pub mcp: McpConfig,
    #[serde(default)]
    pub demo: DemoServerConfig,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    #[serde(default = "default_service_url")]
    pub service_url: String,
    /// Dedicated detailed endpoint. Derived from `service_url` when absent.
    #[serde(default)]
    pub detailed_url: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpConfig {
    #[serde(default)]
    pub transport: McpTransport,
    #[serde(default = "default_mcp_host")]
    pub host: String,
    #[serde(default = "default_mcp_port")]
    pub port: u16,
    #[serde(default = "default_mcp_path")]
    pub path: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum McpTransport {
    #[default]
    Stdio,
    StreamableHttp,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoServerConfig {
    #[serde(default = "default_demo_host")]
    pub host: String,
    #[serde(default = "default_demo_port")]
    pub port: u16,
    #[serde(default = "default_greeting")]
    pub greeting: String,
    #[serde(default = "default_true")]
    pub health_check: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl ClassifierConfig {
    /// Endpoint used by the detailed tool.
    pub fn detailed_url(&self) -> String {
        resolve_detailed_url(self.detailed_url.as_deref(), &self.service_url)
    }
}

/// An explicit override wins; otherwise a `/predict` base gets `_detailed`
/// appended, and anything else falls back to the local default.
pub fn resolve_detailed_url(explicit: Option<&str>, service_url: &str) -> String {
    match explicit {
        Some(url) if !url.is_empty() => url.to_string(),
        _ if service_url.ends_with(PREDICT_SUFFIX) => format!("{service_url}_detailed"),
        _ => DEFAULT_DETAILED_URL.to_string(),
    }
}

impl std::str::FromStr for McpTransport {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "stdio" => Ok(Self::Stdio),
            "streamable_http" | "streamable-http" | "http" => Ok(Self::StreamableHttp),
            other => Err(format!(
                "Unknown MCP transport: '{other}'. Valid transports: stdio, streamable_http"
            )),
        }
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            service_url: default_service_url(),
            detailed_url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for McpConfig {
    fn default() -> Self {
        Self {
            transport: McpTransport::default(),
            host: default_mcp_host(),
            port: default_mcp_port(),
            path: default_mcp_path(),
        }
    }
}

impl Default for DemoServerConfig {
    fn default() -> Self {
        Self {
            host: default_demo_host(),
            port: default_demo_port(),
            greeting: default_greeting(),
            health_check: true,
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_service_url() -> String {
    DEFAULT_SERVICE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_mcp_host() -> String {
    "0.0.0.0".to_string()
}

fn default_mcp_port() -> u16 {
    8080
}

fn default_mcp_path() -> String {
    "/mcp".to_string()
}

fn default_demo_host() -> String {
    "0.0.0.0".to_string()
}

fn default_demo_port() -> u16 {
    8000
}

fn default_greeting() -> String {
    "Hello from a Modal-deployed Go server!".to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}
