//! Analysis service. Handles one form submission end to end.
//!
//! Coordinates between the post source (fetch), the scorer (analyze) and the
//! persister (save), and turns the outcome into a page model.

use crate::domain::{AnalyzeForm, DomainError, PageView};
use crate::ports::{FormHandler, PostSource};
use crate::usecases::{ResultPersister, SentimentScorer};
use std::num::IntErrorKind;
use std::sync::Arc;
use tracing::{info, warn};

pub const MSG_INVALID_NUMBER: &str = "Invalid input! Please enter a valid number.";
pub const MSG_OUT_OF_RANGE: &str = "Please enter a number between 1 and 100.";
pub const MSG_FETCH_FAILED: &str = "Failed to fetch data from API.";

pub const MIN_LIMIT: i64 = 1;
pub const MAX_LIMIT: i64 = 100;
/// Used when the form omits `limit` entirely.
pub const DEFAULT_LIMIT: i64 = 10;

/// Parse and range-check the `limit` field.
///
/// Surrounding whitespace is ignored and a leading sign is accepted, so `" 5 "`
/// and `"+5"` are both 5. An integer too large for `i64` is still a number,
/// so it is reported as out of range.
pub fn parse_limit(raw: Option<&str>) -> Result<usize, DomainError> {
    let limit = match raw {
        None => DEFAULT_LIMIT,
        Some(s) => s.trim().parse::<i64>().map_err(|e| match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                DomainError::InvalidInput(MSG_OUT_OF_RANGE.to_string())
            }
            _ => DomainError::InvalidInput(MSG_INVALID_NUMBER.to_string()),
        })?,
    };
    if !(MIN_LIMIT..=MAX_LIMIT).contains(&limit) {
        return Err(DomainError::InvalidInput(MSG_OUT_OF_RANGE.to_string()));
    }
    Ok(limit as usize)
}

/// Request handler: validate, fetch, score, optionally save.
pub struct AnalysisService {
    source: Arc<dyn PostSource>,
    scorer: SentimentScorer,
    persister: ResultPersister,
    endpoint: String,
}

impl AnalysisService {
    /// Create a new analysis service.
    ///
    /// # Arguments
    /// * `source` - Post source implementation (JSONPlaceholder, stub, etc.)
    /// * `scorer` - Scorer wrapping the shared model handle
    /// * `persister` - Writes joined rows when the user asks for it
    /// * `endpoint` - Collection fetched from the source (normally `posts`)
    pub fn new(
        source: Arc<dyn PostSource>,
        scorer: SentimentScorer,
        persister: ResultPersister,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            source,
            scorer,
            persister,
            endpoint: endpoint.into(),
        }
    }

    /// Run the pipeline for one submission.
    pub async fn process(&self, form: &AnalyzeForm) -> PageView {
        let limit = match parse_limit(form.limit.as_deref()) {
            Ok(limit) => limit,
            Err(DomainError::InvalidInput(message)) => {
                info!(input = ?form.limit, "rejected limit");
                return PageView::failed(form, message);
            }
            Err(e) => return PageView::failed(form, e.to_string()),
        };

        let posts = match self.source.fetch_posts(&self.endpoint, limit).await {
            Ok(posts) if !posts.is_empty() => posts,
            Ok(_) => {
                warn!(endpoint = %self.endpoint, limit, "source returned no posts");
                return PageView::failed(form, MSG_FETCH_FAILED);
            }
            Err(e) => {
                warn!(endpoint = %self.endpoint, limit, error = %e, "Error fetching data");
                return PageView::failed(form, MSG_FETCH_FAILED);
            }
        };

        let texts: Vec<String> = posts.iter().map(|p| p.analysis_text()).collect();
        let sentiments = self.scorer.analyze(&texts).await;

        let saved_file = if form.wants_save() {
            self.persister.save_or_log(&posts, &sentiments).await
        } else {
            None
        };

        info!(
            posts = posts.len(),
            saved = saved_file.is_some(),
            "request processed"
        );

        PageView {
            posts,
            sentiments,
            saved_file,
            error: None,
            limit_input: form.limit.clone(),
            save_checked: form.wants_save(),
        }
    }
}

#[async_trait::async_trait]
impl FormHandler for AnalysisService {
    async fn handle(&self, form: AnalyzeForm) -> PageView {
        self.process(&form).await
    }
}
