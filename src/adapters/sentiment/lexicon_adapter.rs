//! Offline lexicon classifier.
//!
//! Used when no hosted model is configured. Deterministic: the same text always
//! yields the same label and score, so it doubles as the test model.

use crate::domain::{Classification, DomainError, LABEL_NEGATIVE, LABEL_POSITIVE};
use crate::ports::SentimentModel;
use tracing::debug;

const POSITIVE_WORDS: &[&str] = &[
    "amazing", "awesome", "beautiful", "best", "better", "brilliant", "calm", "delight",
    "delightful", "enjoy", "excellent", "fantastic", "fine", "glad", "good", "great", "happy",
    "helpful", "joy", "kind", "like", "love", "lovely", "nice", "perfect", "pleasant", "pleased",
    "recommend", "success", "superb", "thank", "thanks", "win", "wonderful",
];

const NEGATIVE_WORDS: &[&str] = &[
    "angry", "annoying", "awful", "bad", "boring", "broken", "disappointed", "disappointing",
    "dislike", "fail", "failure", "hate", "horrible", "hurt", "lose", "mess", "pain", "poor",
    "problem", "sad", "terrible", "ugly", "unhappy", "useless", "waste", "worse", "worst", "wrong",
];

const NEGATORS: &[&str] = &["not", "no", "never", "nor", "without"];

/// Steepness of the logistic mapping from net polarity to confidence.
const CONFIDENCE_SLOPE: f64 = 0.8;

/// Word-list classifier emitting SST-2 style `POSITIVE` / `NEGATIVE` labels.
#[derive(Debug, Default, Clone)]
pub struct LexiconAdapter;

impl LexiconAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Net polarity: +1 per positive word, -1 per negative word, flipped after a negator.
    fn polarity(text: &str) -> i32 {
        let lowered = text.to_lowercase();
        let mut net = 0;
        let mut negate = false;
        for word in lowered
            .split(|c: char| !c.is_alphanumeric() && c != '\'')
            .filter(|w| !w.is_empty())
        {
            let word = word.trim_matches('\'');
            if NEGATORS.contains(&word) || word.ends_with("n't") {
                negate = true;
                continue;
            }
            let hit = if POSITIVE_WORDS.contains(&word) {
                1
            } else if NEGATIVE_WORDS.contains(&word) {
                -1
            } else {
                0
            };
            if hit != 0 {
                net += if negate { -hit } else { hit };
                negate = false;
            }
        }
        net
    }

    fn classify_one(text: &str) -> Classification {
        let net = Self::polarity(text);
        let label = if net < 0 { LABEL_NEGATIVE } else { LABEL_POSITIVE };
        let score = 1.0 / (1.0 + (-(net.abs() as f64) * CONFIDENCE_SLOPE).exp());
        Classification {
            label: label.to_string(),
            score,
        }
    }
}

#[async_trait::async_trait]
impl SentimentModel for LexiconAdapter {
    async fn classify(&self, texts: &[String]) -> Result<Vec<Classification>, DomainError> {
        debug!(inputs = texts.len(), "classifying with lexicon model");
        Ok(texts.iter().map(|t| Self::classify_one(t)).collect())
    }

    fn name(&self) -> &str {
        "lexicon"
    }
}
