//! Hugging Face Inference API adapter for sentiment classification.
//!
//! Targets text-classification models such as
//! `distilbert-base-uncased-finetuned-sst-2-english`. Implements `SentimentModel`.

use crate::domain::{Classification, DomainError};
use crate::ports::SentimentModel;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Hosted text-classification model.
///
/// The model is addressed as `{api_url}/{model}`; requests carry a bearer token.
pub struct HuggingFaceAdapter {
    client: reqwest::Client,
    endpoint: String,
    api_token: String,
    model: String,
}

impl HuggingFaceAdapter {
    /// Create a new adapter.
    ///
    /// # Arguments
    /// * `api_url` - Inference API root (e.g., "https://api-inference.huggingface.co/models")
    /// * `api_token` - Hugging Face access token
    /// * `model` - Model id (e.g., "distilbert-base-uncased-finetuned-sst-2-english")
    pub fn new(api_url: String, api_token: String, model: String) -> Self {
        let endpoint = format!("{}/{}", api_url.trim_end_matches('/'), model);
        Self {
            client: reqwest::Client::new(),
            endpoint,
            api_token,
            model,
        }
    }

    /// Pick the top-scoring label from each per-input candidate list.
    fn top_labels(batches: Vec<Vec<LabelScore>>) -> Result<Vec<Classification>, DomainError> {
        batches
            .into_iter()
            .enumerate()
            .map(|(i, candidates)| {
                candidates
                    .into_iter()
                    .max_by(|a, b| a.score.total_cmp(&b.score))
                    .map(|best| Classification {
                        label: best.label,
                        score: best.score,
                    })
                    .ok_or_else(|| {
                        DomainError::Inference(format!("No labels returned for input {}", i))
                    })
            })
            .collect()
    }
}

/// Inference API request structure.
#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a [String],
    options: InferenceOptions,
}

#[derive(Serialize)]
struct InferenceOptions {
    wait_for_model: bool,
}

/// One candidate label for one input.
#[derive(Deserialize)]
struct LabelScore {
    label: String,
    score: f64,
}

#[async_trait::async_trait]
impl SentimentModel for HuggingFaceAdapter {
    async fn classify(&self, texts: &[String]) -> Result<Vec<Classification>, DomainError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        info!(
            model = %self.model,
            inputs = texts.len(),
            "sending batch to inference API"
        );

        let request = InferenceRequest {
            inputs: texts,
            options: InferenceOptions {
                wait_for_model: true,
            },
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_token))
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::Inference(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %text, "inference API returned error");
            return Err(DomainError::Inference(format!(
                "API error {}: {}",
                status,
                text.chars().take(200).collect::<String>()
            )));
        }

        let batches: Vec<Vec<LabelScore>> = response
            .json()
            .await
            .map_err(|e| DomainError::Inference(format!("Failed to parse API response: {}", e)))?;

        debug!(outputs = batches.len(), "received inference response");

        if batches.len() != texts.len() {
            return Err(DomainError::Inference(format!(
                "Expected {} results, got {}",
                texts.len(),
                batches.len()
            )));
        }

        Self::top_labels(batches)
    }

    fn name(&self) -> &str {
        &self.model
    }
}
