use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("request error: {0}")]
    Request(#[source] reqwest::Error),

    #[error("emotion api error: {status} - {body}")]
    Api { status: String, body: String },

    #[error("decode error: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    #[error("MCP error: {0}")]
    Mcp(String),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn mcp(msg: impl Into<String>) -> Self {
        Self::Mcp(msg.into())
    }

    pub fn api(status: reqwest::StatusCode, body: impl Into<String>) -> Self {
        Self::Api {
            status: status.to_string(),
            body: body.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_api_error_message_carries_status_line_and_body() {
        let err = Error::api(reqwest::StatusCode::INTERNAL_SERVER_ERROR, "boom");
        assert_eq!(
            err.to_string(),
            "emotion api error: 500 Internal Server Error - boom"
        );
    }

    #[test]
    fn test_decode_error_message() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = Error::Decode(source);
        assert!(err.to_string().starts_with("decode error: "));
    }
}
