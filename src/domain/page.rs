//! Request/response models exchanged between the web adapter and the request handler.

use super::entities::{Post, SentimentResult};
use serde::Deserialize;
use std::path::PathBuf;

/// Submitted form fields. Both are raw strings; validation happens in the handler.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzeForm {
    pub limit: Option<String>,
    pub save: Option<String>,
}

impl AnalyzeForm {
    /// Only the literal `"yes"` requests persistence.
    pub fn wants_save(&self) -> bool {
        self.save.as_deref() == Some("yes")
    }
}

/// Everything the page needs to render one request.
///
/// At most one of `error` or a populated `(posts, sentiments)` pair is meaningful.
#[derive(Debug, Clone, Default)]
pub struct PageView {
    pub posts: Vec<Post>,
    pub sentiments: Vec<SentimentResult>,
    pub saved_file: Option<PathBuf>,
    pub error: Option<String>,
    /// Echo of the submitted limit so the form keeps its value.
    pub limit_input: Option<String>,
    pub save_checked: bool,
}

impl PageView {
    /// Initial state on GET.
    pub fn display() -> Self {
        Self::default()
    }

    /// Terminal state carrying only an error message.
    pub fn failed(form: &AnalyzeForm, message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            limit_input: form.limit.clone(),
            save_checked: form.wants_save(),
            ..Self::default()
        }
    }

    /// Post/sentiment pairs, in fetch order.
    pub fn rows(&self) -> impl Iterator<Item = (&Post, &SentimentResult)> {
        self.posts.iter().zip(self.sentiments.iter())
    }
}
