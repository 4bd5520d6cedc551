mod client;
mod types;

pub use client::{EmotionClassifier, HttpEmotionClient};
pub use types::{EmotionRequest, Prediction};
