//! Application configuration. Listener, upstream URLs, output location, model credentials.

use serde::Deserialize;

/// Posts API used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
/// Collection fetched by the form handler.
pub const DEFAULT_ENDPOINT: &str = "posts";
/// Filename prefix of saved result dumps.
pub const DEFAULT_FILE_PREFIX: &str = "sentiment_results";
/// Model served by the hosted inference API.
pub const DEFAULT_HF_MODEL: &str = "distilbert-base-uncased-finetuned-sst-2-english";
pub const DEFAULT_HF_API_URL: &str = "https://api-inference.huggingface.co/models";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Listener interface. Read from POST_SENTIMENT_HOST.
    #[serde(default)]
    pub host: Option<String>,

    /// Listener port. Read from POST_SENTIMENT_PORT.
    #[serde(default)]
    pub port: Option<u16>,

    /// Base URL of the posts API (no trailing slash). Read from POST_SENTIMENT_API_BASE_URL.
    #[serde(default)]
    pub api_base_url: Option<String>,

    /// Collection to fetch. Read from POST_SENTIMENT_ENDPOINT.
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Directory for result dumps. Read from POST_SENTIMENT_OUTPUT_DIR.
    #[serde(default)]
    pub output_dir: Option<String>,

    /// Read from POST_SENTIMENT_FILE_PREFIX.
    #[serde(default)]
    pub file_prefix: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Sentiment model configuration
    // ─────────────────────────────────────────────────────────────────────────
    /// Hugging Face API token. Read from POST_SENTIMENT_HF_API_TOKEN or HF_API_TOKEN.
    #[serde(default)]
    pub hf_api_token: Option<String>,

    /// Inference API base URL. Read from POST_SENTIMENT_HF_API_URL.
    #[serde(default)]
    pub hf_api_url: Option<String>,

    /// Read from POST_SENTIMENT_HF_MODEL.
    #[serde(default)]
    pub hf_model: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("POST_SENTIMENT"));
        if let Ok(path) = std::env::var("POST_SENTIMENT_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        let mut cfg: Self = c.build()?.try_deserialize()?;
        // HF_API_TOKEN is read directly (no prefix) so a shared .env works as-is
        if cfg.hf_api_token.is_none() {
            if let Ok(token) = std::env::var("HF_API_TOKEN") {
                if !token.trim().is_empty() {
                    cfg.hf_api_token = Some(token);
                }
            }
        }
        Ok(cfg)
    }

    /// Returns listener host. Defaults to all interfaces.
    pub fn host_or_default(&self) -> String {
        self.host.clone().unwrap_or_else(|| "0.0.0.0".to_string())
    }

    /// Returns listener port. Defaults to 5000.
    pub fn port_or_default(&self) -> u16 {
        self.port.unwrap_or(5000)
    }

    pub fn api_base_url_or_default(&self) -> String {
        self.api_base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
    }

    pub fn endpoint_or_default(&self) -> String {
        self.endpoint
            .clone()
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
    }

    /// Returns the output directory. Defaults to the working directory.
    pub fn output_dir_or_default(&self) -> String {
        self.output_dir.clone().unwrap_or_else(|| ".".to_string())
    }

    pub fn file_prefix_or_default(&self) -> String {
        self.file_prefix
            .clone()
            .unwrap_or_else(|| DEFAULT_FILE_PREFIX.to_string())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Model helpers
    // ─────────────────────────────────────────────────────────────────────────

    pub fn hf_api_url_or_default(&self) -> String {
        self.hf_api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_HF_API_URL.to_string())
    }

    pub fn hf_model_or_default(&self) -> String {
        self.hf_model
            .clone()
            .unwrap_or_else(|| DEFAULT_HF_MODEL.to_string())
    }

    /// Returns true if the hosted model can be used (token present).
    pub fn is_hf_configured(&self) -> bool {
        self.hf_api_token
            .as_deref()
            .is_some_and(|t| !t.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.host_or_default(), "0.0.0.0");
        assert_eq!(cfg.port_or_default(), 5000);
        assert_eq!(cfg.endpoint_or_default(), "posts");
        assert_eq!(cfg.file_prefix_or_default(), "sentiment_results");
        assert_eq!(cfg.output_dir_or_default(), ".");
        assert!(!cfg.is_hf_configured());
    }

    #[test]
    fn test_blank_token_is_not_configured() {
        let cfg = AppConfig {
            hf_api_token: Some("  ".into()),
            ..AppConfig::default()
        };
        assert!(!cfg.is_hf_configured());
    }
}
