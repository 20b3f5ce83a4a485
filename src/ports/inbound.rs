//! Inbound port. The web adapter calls into the application.

use crate::domain::{AnalyzeForm, PageView};

/// Input port: the HTTP form handler invokes the analysis use case.
#[async_trait::async_trait]
pub trait FormHandler: Send + Sync {
    /// Process one submitted form. Never fails; problems end up in `PageView::error`.
    async fn handle(&self, form: AnalyzeForm) -> PageView;
}
