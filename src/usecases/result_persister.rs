//! Result persister. Joins posts with their sentiments and hands the rows to the store.

use crate::domain::{DomainError, PersistedRecord, Post, SentimentResult};
use crate::ports::ResultStore;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::warn;

pub struct ResultPersister {
    store: Arc<dyn ResultStore>,
    prefix: String,
}

impl ResultPersister {
    /// `prefix` names the output files, e.g. `sentiment_results`.
    pub fn new(store: Arc<dyn ResultStore>, prefix: impl Into<String>) -> Self {
        Self {
            store,
            prefix: prefix.into(),
        }
    }

    /// Join by position. Both slices must have the same length.
    pub fn join(
        posts: &[Post],
        sentiments: &[SentimentResult],
    ) -> Result<Vec<PersistedRecord>, DomainError> {
        if posts.len() != sentiments.len() {
            return Err(DomainError::LengthMismatch {
                posts: posts.len(),
                sentiments: sentiments.len(),
            });
        }
        Ok(posts
            .iter()
            .zip(sentiments)
            .map(|(p, s)| PersistedRecord::join(p, s))
            .collect())
    }

    /// Save joined rows. Returns the written file path.
    pub async fn save(
        &self,
        posts: &[Post],
        sentiments: &[SentimentResult],
    ) -> Result<PathBuf, DomainError> {
        let records = Self::join(posts, sentiments)?;
        self.store.save_records(&self.prefix, &records).await
    }

    /// Like [`save`](Self::save), but failures are logged and reported as `None`.
    pub async fn save_or_log(
        &self,
        posts: &[Post],
        sentiments: &[SentimentResult],
    ) -> Option<PathBuf> {
        match self.save(posts, sentiments).await {
            Ok(path) => Some(path),
            Err(e) => {
                warn!(error = %e, prefix = %self.prefix, "Error saving results");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::persistence::JsonFileStore;
    use crate::domain::Sentiment;
    use std::collections::BTreeSet;

    fn posts(n: i64) -> Vec<Post> {
        (1..=n)
            .map(|id| Post {
                id,
                title: format!("t{}", id),
                body: format!("b{}", id),
            })
            .collect()
    }

    fn results(n: usize) -> Vec<SentimentResult> {
        vec![
            SentimentResult {
                label: "POSITIVE".into(),
                score: 0.75,
                sentiment: Sentiment::Positive,
            };
            n
        ]
    }

    #[test]
    fn test_join_rejects_mismatched_lengths() {
        let err = ResultPersister::join(&posts(3), &results(2)).unwrap_err();
        assert!(matches!(
            err,
            DomainError::LengthMismatch {
                posts: 3,
                sentiments: 2
            }
        ));
    }

    #[tokio::test]
    async fn test_saved_file_round_trips_field_union() {
        let dir = tempfile::tempdir().unwrap();
        let persister = ResultPersister::new(
            Arc::new(JsonFileStore::new(dir.path())),
            "sentiment_results",
        );

        let path = persister.save(&posts(4), &results(4)).await.unwrap();

        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("sentiment_results_"));
        assert!(name.ends_with(".json"));

        let rows: Vec<serde_json::Map<String, serde_json::Value>> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(rows.len(), 4);
        let expected: BTreeSet<&str> = ["id", "title", "body", "label", "score", "sentiment"]
            .into_iter()
            .collect();
        for row in &rows {
            let keys: BTreeSet<&str> = row.keys().map(String::as_str).collect();
            assert_eq!(keys, expected);
        }
        assert_eq!(rows[3]["id"], 4);
        assert_eq!(rows[0]["sentiment"], "Positive");
    }

    #[tokio::test]
    async fn test_save_or_log_swallows_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let persister = ResultPersister::new(Arc::new(JsonFileStore::new(dir.path())), "x");
        assert!(persister.save_or_log(&posts(2), &results(1)).await.is_none());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
