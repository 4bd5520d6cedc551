use crate::classifier::EmotionClassifier;
use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct EmotionArgs {
    #[schemars(description = "Text to classify")]
    pub text: String,
}

/// MCP server exposing the emotion classifier as tools.
#[derive(Clone)]
pub struct EmotionServer {
    classifier: Arc<dyn EmotionClassifier>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl EmotionServer {
    pub fn new(classifier: Arc<dyn EmotionClassifier>) -> Self {
        Self {
            classifier,
            tool_router: Self::tool_router(),
        }
    }

    /// Names of the registered tools, in registration order.
    pub fn tool_names(&self) -> Vec<String> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect()
    }

    #[tool(description = "Detect the dominant emotion in a piece of text. Returns the label and confidence.")]
    pub async fn emotion_detection(
        &self,
        Parameters(args): Parameters<EmotionArgs>,
    ) -> Result<CallToolResult, McpError> {
        match self.classifier.predict(&args.text).await {
            Ok(prediction) => {
                let msg = prediction.summary();
                info!("emotion_detection: {}", msg);
                Ok(CallToolResult::success(vec![Content::text(msg)]))
            }
            Err(e) => {
                warn!("emotion_detection failed: {}", e);
                Ok(CallToolResult::error(vec![Content::text(e.to_string())]))
            }
        }
    }

    #[tool(description = "Detect emotions in a piece of text and return the classifier's full JSON response.")]
    pub async fn emotion_detection_detailed(
        &self,
        Parameters(args): Parameters<EmotionArgs>,
    ) -> Result<CallToolResult, McpError> {
        match self.classifier.predict_detailed(&args.text).await {
            Ok(raw) => Ok(CallToolResult::success(vec![Content::text(raw)])),
            Err(e) => {
                warn!("emotion_detection_detailed failed: {}", e);
                Ok(CallToolResult::error(vec![Content::text(e.to_string())]))
            }
        }
    }
}

#[tool_handler]
impl ServerHandler for EmotionServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").into(),
                title: Some("Emotion detection".into()),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Classifies the emotion expressed in text. Use emotion_detection for a one-line \
                 summary and emotion_detection_detailed for the full classifier output."
                    .into(),
            ),
            ..Default::default()
        }
    }
}
