use async_trait::async_trait;
use emotion_mcp::{
    Error, Result,
    classifier::{EmotionClassifier, Prediction},
};
use std::sync::{Arc, Mutex};

/// Mock classifier for testing the tool server without a network
#[derive(Debug, Default)]
pub struct MockClassifier {
    pub prediction: Option<Prediction>,
    pub detailed: Option<String>,
    pub error: Option<String>,
    pub requests: Arc<Mutex<Vec<String>>>,
}

impl MockClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prediction(mut self, emotion: &str, confidence: f64) -> Self {
        self.prediction = Some(Prediction {
            emotion: emotion.to_string(),
            confidence,
        });
        self
    }

    pub fn with_detailed(mut self, raw: &str) -> Self {
        self.detailed = Some(raw.to_string());
        self
    }

    pub fn with_error(mut self, error: &str) -> Self {
        self.error = Some(error.to_string());
        self
    }

    pub fn get_requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn record(&self, text: &str) -> Result<()> {
        self.requests.lock().unwrap().push(text.to_string());

        match self.error {
            Some(ref error) => Err(Error::Api {
                status: "503 Service Unavailable".to_string(),
                body: error.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl EmotionClassifier for MockClassifier {
    async fn predict(&self, text: &str) -> Result<Prediction> {
        self.record(text)?;
        self.prediction
            .clone()
            .ok_or_else(|| Error::config("No mock prediction configured"))
    }

    async fn predict_detailed(&self, text: &str) -> Result<String> {
        self.record(text)?;
        self.detailed
            .clone()
            .ok_or_else(|| Error::config("No mock detailed response configured"))
    }
}
