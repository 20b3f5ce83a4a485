//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod page;

pub use entities::{
    Classification, LABEL_ERROR, LABEL_NEGATIVE, LABEL_POSITIVE, PersistedRecord, Post, Sentiment,
    SentimentResult,
};
pub use errors::DomainError;
pub use page::{AnalyzeForm, PageView};
