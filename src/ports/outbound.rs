//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{Classification, DomainError, PersistedRecord, Post};
use std::path::PathBuf;

/// Source of posts (the JSONPlaceholder REST API in production).
#[async_trait::async_trait]
pub trait PostSource: Send + Sync {
    /// Fetch the collection at `endpoint` and keep the first `limit` items.
    ///
    /// Bounds on `limit` are the caller's responsibility.
    async fn fetch_posts(&self, endpoint: &str, limit: usize) -> Result<Vec<Post>, DomainError>;
}

/// Pre-trained text classifier. Built once at startup and shared read-only.
#[async_trait::async_trait]
pub trait SentimentModel: Send + Sync {
    /// Classify a batch. Implementations return one classification per input, in order.
    async fn classify(&self, texts: &[String]) -> Result<Vec<Classification>, DomainError>;

    /// Short model identifier for logs.
    fn name(&self) -> &str;
}

/// Sink for joined post/sentiment rows.
#[async_trait::async_trait]
pub trait ResultStore: Send + Sync {
    /// Write all records under a fresh name derived from `prefix`. Returns where they landed.
    async fn save_records(
        &self,
        prefix: &str,
        records: &[PersistedRecord],
    ) -> Result<PathBuf, DomainError>;
}
