//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/IO types here; adapters map into these.

use serde::{Deserialize, Serialize};

/// Raw label the classifier emits for positive text.
pub const LABEL_POSITIVE: &str = "POSITIVE";
/// Raw label the classifier emits for negative text.
pub const LABEL_NEGATIVE: &str = "NEGATIVE";
/// Label of a sentinel record substituted when inference fails.
pub const LABEL_ERROR: &str = "ERROR";

/// A placeholder social media post as served by the posts API.
///
/// Upstream also sends `userId`; it is ignored on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub body: String,
}

impl Post {
    /// Text fed to the classifier: title and body joined by a single space.
    pub fn analysis_text(&self) -> String {
        format!("{} {}", self.title, self.body)
    }
}

/// Raw classifier output for one input, before rounding and mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub label: String,
    pub score: f64,
}

/// Normalized sentiment shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Unknown,
}

impl Sentiment {
    /// Maps a raw label. Anything other than `POSITIVE` is treated as negative,
    /// which matches the binary SST-2 classifier.
    pub fn from_label(label: &str) -> Self {
        if label == LABEL_POSITIVE {
            Sentiment::Positive
        } else {
            Sentiment::Negative
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scored sentiment for one post. Positionally aligned with the posts it was derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub label: String,
    /// Confidence in [0, 1], rounded to 4 decimal places. 0.0 for sentinels.
    pub score: f64,
    pub sentiment: Sentiment,
}

impl SentimentResult {
    /// Placeholder used when inference for the batch failed.
    pub fn sentinel() -> Self {
        Self {
            label: LABEL_ERROR.to_string(),
            score: 0.0,
            sentiment: Sentiment::Unknown,
        }
    }

    pub fn is_sentinel(&self) -> bool {
        self.label == LABEL_ERROR && self.sentiment == Sentiment::Unknown
    }
}

/// A post joined with its sentiment. Written to disk, never read back by the app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedRecord {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub label: String,
    pub score: f64,
    pub sentiment: Sentiment,
}

impl PersistedRecord {
    pub fn join(post: &Post, result: &SentimentResult) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            body: post.body.clone(),
            label: result.label.clone(),
            score: result.score,
            sentiment: result.sentiment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_ignores_user_id() {
        let json = r#"{"userId": 1, "id": 7, "title": "t", "body": "b"}"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, 7);
        assert_eq!(post.analysis_text(), "t b");
    }

    #[test]
    fn test_label_mapping_is_binary() {
        assert_eq!(Sentiment::from_label("POSITIVE"), Sentiment::Positive);
        assert_eq!(Sentiment::from_label("NEGATIVE"), Sentiment::Negative);
        // A neutral class would fall into Negative; kept on purpose.
        assert_eq!(Sentiment::from_label("NEUTRAL"), Sentiment::Negative);
        assert_eq!(Sentiment::from_label("positive"), Sentiment::Negative);
    }

    #[test]
    fn test_persisted_record_field_order() {
        let post = Post {
            id: 1,
            title: "a".into(),
            body: "b".into(),
        };
        let record = PersistedRecord::join(&post, &SentimentResult::sentinel());
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"id":1,"title":"a","body":"b","label":"ERROR","score":0.0,"sentiment":"Unknown"}"#
        );
    }
}
