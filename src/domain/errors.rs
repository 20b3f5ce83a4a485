//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Fetch failed: {0}")]
    Fetch(String),

    #[error("Sentiment inference failed: {0}")]
    Inference(String),

    #[error("Persisting results failed: {0}")]
    Persist(String),

    /// Posts and sentiments must be positionally aligned before they are joined.
    #[error("Length mismatch: {posts} posts vs {sentiments} sentiments")]
    LengthMismatch { posts: usize, sentiments: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
