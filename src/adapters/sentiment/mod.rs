//! Sentiment model adapters. Implement SentimentModel.
//!
//! Provides a hosted Hugging Face adapter and an offline lexicon model.

pub mod huggingface_adapter;
pub mod lexicon_adapter;

pub use huggingface_adapter::HuggingFaceAdapter;
pub use lexicon_adapter::LexiconAdapter;
