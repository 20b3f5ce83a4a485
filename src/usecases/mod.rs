//! Application use cases. Orchestrate domain logic via ports.

pub mod analysis_service;
pub mod result_persister;
pub mod sentiment_scorer;

pub use analysis_service::AnalysisService;
pub use result_persister::ResultPersister;
pub use sentiment_scorer::SentimentScorer;
