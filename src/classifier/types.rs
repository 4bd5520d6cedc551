use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmotionRequest {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub emotion: String,
    pub confidence: f64,
}

impl Prediction {
    /// Reads `emotion` and `confidence` from a loosely typed response object.
    /// Missing or mistyped fields fall back to `""` and `0.0`.
    pub fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            emotion: map
                .get("emotion")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            confidence: map
                .get("confidence")
                .and_then(Value::as_f64)
                .unwrap_or_default(),
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "Emotion: {} (Confidence: {:.2}%)",
            self.emotion,
            self.confidence * 100.0
        )
    }
}

impl std::fmt::Display for Prediction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.summary())
    }
}
