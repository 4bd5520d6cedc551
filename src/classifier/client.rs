use super::types::*;
use crate::{Error, Result, config::ClassifierConfig};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::debug;

#[async_trait]
pub trait EmotionClassifier: Send + Sync {
    /// Classifies `text` and returns the top label with its confidence.
    async fn predict(&self, text: &str) -> Result<Prediction>;

    /// Classifies `text` against the detailed endpoint and returns its raw JSON body.
    async fn predict_detailed(&self, text: &str) -> Result<String>;
}

pub struct HttpEmotionClient {
    client: reqwest::Client,
    service_url: String,
    detailed_url: String,
}

impl HttpEmotionClient {
    pub fn new(config: ClassifierConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::config(format!("Failed to create HTTP client: {}", e)))?;

        let detailed_url = config.detailed_url();

        Ok(Self {
            client,
            service_url: config.service_url,
            detailed_url,
        })
    }

    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    pub fn detailed_url(&self) -> &str {
        &self.detailed_url
    }

    /// POSTs `{"text": ...}` to `url` and returns the body of a 200 response.
    async fn post_text(&self, url: &str, text: &str) -> Result<String> {
        debug!("Posting {} bytes of text to {}", text.len(), url);

        let response = self
            .client
            .post(url)
            .json(&EmotionRequest {
                text: text.to_string(),
            })
            .send()
            .await
            .map_err(Error::Request)?;

        let status = response.status();
        let body = response.text().await.map_err(Error::Request)?;

        if status != StatusCode::OK {
            return Err(Error::api(status, body));
        }

        Ok(body)
    }
}

#[async_trait]
impl EmotionClassifier for HttpEmotionClient {
    async fn predict(&self, text: &str) -> Result<Prediction> {
        let body = self.post_text(&self.service_url, text).await?;

        // A `null` body decodes to an empty object
        let out: Option<Map<String, Value>> =
            serde_json::from_str(&body).map_err(Error::Decode)?;
        let prediction = Prediction::from_map(&out.unwrap_or_default());

        debug!(
            "Received prediction {} ({:.4})",
            prediction.emotion, prediction.confidence
        );
        Ok(prediction)
    }

    async fn predict_detailed(&self, text: &str) -> Result<String> {
        self.post_text(&self.detailed_url, text).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn create_test_config() -> ClassifierConfig {
        ClassifierConfig {
            service_url: "http://classifier.local/predict".to_string(),
            detailed_url: None,
            timeout_secs: 30,
        }
    }

    #[test]
    fn test_client_creation_derives_detailed_url() {
        let client = HttpEmotionClient::new(create_test_config()).unwrap();

        assert_eq!(client.service_url(), "http://classifier.local/predict");
        assert_eq!(
            client.detailed_url(),
            "http://classifier.local/predict_detailed"
        );
    }

    #[test]
    fn test_client_creation_with_explicit_detailed_url() {
        let mut config = create_test_config();
        config.detailed_url = Some("http://other.local/details".to_string());

        let client = HttpEmotionClient::new(config).unwrap();
        assert_eq!(client.detailed_url(), "http://other.local/details");
    }
}
