//! JSONPlaceholder adapter. Implements PostSource over the public REST API.

use crate::domain::{DomainError, Post};
use crate::ports::PostSource;
use reqwest::Client;
use tracing::{info, warn};

/// Client for `https://jsonplaceholder.typicode.com` (or any API with the same shape).
pub struct JsonPlaceholderSource {
    client: Client,
    base_url: String,
}

impl JsonPlaceholderSource {
    /// `base_url` is the API root without a trailing slash, e.g. `https://jsonplaceholder.typicode.com`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url_for(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }
}

#[async_trait::async_trait]
impl PostSource for JsonPlaceholderSource {
    async fn fetch_posts(&self, endpoint: &str, limit: usize) -> Result<Vec<Post>, DomainError> {
        let url = self.url_for(endpoint);

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!(url = %url, error = %e, "posts request failed");
            DomainError::Fetch(format!("HTTP request failed: {}", e))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            warn!(url = %url, status = %status, "posts API returned error");
            return Err(DomainError::Fetch(format!("API error {}", status)));
        }

        let mut posts: Vec<Post> = response.json().await.map_err(|e| {
            warn!(url = %url, error = %e, "posts response did not decode");
            DomainError::Fetch(format!("Failed to parse API response: {}", e))
        })?;
        posts.truncate(limit);

        info!(url = %url, count = posts.len(), limit, "fetched posts");
        Ok(posts)
    }
}
