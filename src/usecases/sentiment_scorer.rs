//! Sentiment scorer. Wraps the shared model handle with truncation, rounding and
//! label mapping, and falls back to sentinel records when a batch fails.

use crate::domain::{DomainError, Sentiment, SentimentResult};
use crate::ports::SentimentModel;
use std::sync::Arc;
use tracing::{info, warn};

/// Longest input the classifier accepts, in characters.
pub const MAX_TEXT_CHARS: usize = 512;

/// Keep at most `max` characters (not bytes).
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Round to 4 decimal places.
pub fn round_score(score: f64) -> f64 {
    (score * 10_000.0).round() / 10_000.0
}

pub struct SentimentScorer {
    model: Arc<dyn SentimentModel>,
}

impl SentimentScorer {
    pub fn new(model: Arc<dyn SentimentModel>) -> Self {
        Self { model }
    }

    /// Score every text, failing the whole batch on any model error.
    ///
    /// On success the result has exactly `texts.len()` entries.
    pub async fn try_analyze(&self, texts: &[String]) -> Result<Vec<SentimentResult>, DomainError> {
        let inputs: Vec<String> = texts
            .iter()
            .map(|t| truncate_chars(t, MAX_TEXT_CHARS).to_string())
            .collect();

        let raw = self.model.classify(&inputs).await?;
        if raw.len() != inputs.len() {
            return Err(DomainError::Inference(format!(
                "model {} returned {} results for {} inputs",
                self.model.name(),
                raw.len(),
                inputs.len()
            )));
        }

        Ok(raw
            .into_iter()
            .map(|c| SentimentResult {
                sentiment: Sentiment::from_label(&c.label),
                score: round_score(c.score),
                label: c.label,
            })
            .collect())
    }

    /// Like [`try_analyze`](Self::try_analyze), but a failed batch becomes
    /// `texts.len()` sentinel records instead of an error.
    pub async fn analyze(&self, texts: &[String]) -> Vec<SentimentResult> {
        match self.try_analyze(texts).await {
            Ok(results) => {
                info!(
                    model = %self.model.name(),
                    count = results.len(),
                    "sentiment analysis complete"
                );
                results
            }
            Err(e) => {
                warn!(
                    model = %self.model.name(),
                    count = texts.len(),
                    error = %e,
                    "Error in sentiment analysis; substituting sentinel results"
                );
                vec![SentimentResult::sentinel(); texts.len()]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sentiment::LexiconAdapter;
    use crate::domain::Classification;
    use std::sync::Mutex;

    /// Records what it was asked and answers with a fixed classification.
    struct RecordingModel {
        seen: Mutex<Vec<String>>,
        answer: Classification,
    }

    #[async_trait::async_trait]
    impl SentimentModel for RecordingModel {
        async fn classify(&self, texts: &[String]) -> Result<Vec<Classification>, DomainError> {
            self.seen.lock().unwrap().extend(texts.iter().cloned());
            Ok(vec![self.answer.clone(); texts.len()])
        }
        fn name(&self) -> &str {
            "recording"
        }
    }

    struct FailingModel;

    #[async_trait::async_trait]
    impl SentimentModel for FailingModel {
        async fn classify(&self, _texts: &[String]) -> Result<Vec<Classification>, DomainError> {
            Err(DomainError::Inference("boom".into()))
        }
        fn name(&self) -> &str {
            "failing"
        }
    }

    /// Drops the last result to break alignment.
    struct ShortModel;

    #[async_trait::async_trait]
    impl SentimentModel for ShortModel {
        async fn classify(&self, texts: &[String]) -> Result<Vec<Classification>, DomainError> {
            let n = texts.len().saturating_sub(1);
            Ok(vec![
                Classification {
                    label: "POSITIVE".into(),
                    score: 0.9
                };
                n
            ])
        }
        fn name(&self) -> &str {
            "short"
        }
    }

    fn recording(label: &str, score: f64) -> Arc<RecordingModel> {
        Arc::new(RecordingModel {
            seen: Mutex::new(Vec::new()),
            answer: Classification {
                label: label.to_string(),
                score,
            },
        })
    }

    #[test]
    fn test_truncate_chars_counts_characters() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("", 3), "");
    }

    #[test]
    fn test_round_score() {
        assert_eq!(round_score(0.987654), 0.9877);
        assert_eq!(round_score(0.5), 0.5);
    }

    #[tokio::test]
    async fn test_inputs_are_truncated_to_512_chars() {
        let model = recording("POSITIVE", 0.99);
        let scorer = SentimentScorer::new(model.clone());
        let long = "é".repeat(600);

        scorer.analyze(&[long, "short".to_string()]).await;

        let seen = model.seen.lock().unwrap();
        assert_eq!(seen[0].chars().count(), MAX_TEXT_CHARS);
        assert_eq!(seen[1], "short");
    }

    #[tokio::test]
    async fn test_mapping_and_rounding() {
        let scorer = SentimentScorer::new(recording("NEGATIVE", 0.123456));
        let out = scorer.analyze(&["x".to_string()]).await;
        assert_eq!(out[0].label, "NEGATIVE");
        assert_eq!(out[0].score, 0.1235);
        assert_eq!(out[0].sentiment, Sentiment::Negative);
    }

    #[tokio::test]
    async fn test_failure_yields_one_sentinel_per_text() {
        let scorer = SentimentScorer::new(Arc::new(FailingModel));
        let texts: Vec<String> = (0..5).map(|i| format!("text {}", i)).collect();

        let out = scorer.analyze(&texts).await;

        assert_eq!(out.len(), 5);
        for r in &out {
            assert_eq!(r.label, "ERROR");
            assert_eq!(r.score, 0.0);
            assert_eq!(r.sentiment, Sentiment::Unknown);
        }
        assert!(scorer.try_analyze(&texts).await.is_err());
    }

    #[tokio::test]
    async fn test_misaligned_model_output_is_a_failure() {
        let scorer = SentimentScorer::new(Arc::new(ShortModel));
        let texts = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let err = scorer.try_analyze(&texts).await.unwrap_err();
        assert!(matches!(err, DomainError::Inference(_)));
        assert!(scorer.analyze(&texts).await.iter().all(|r| r.is_sentinel()));
    }

    #[tokio::test]
    async fn test_scoring_is_idempotent() {
        let scorer = SentimentScorer::new(Arc::new(LexiconAdapter::new()));
        let texts = vec![
            "I love this, it is great".to_string(),
            "awful and broken".to_string(),
        ];
        assert_eq!(scorer.analyze(&texts).await, scorer.analyze(&texts).await);
    }
}
