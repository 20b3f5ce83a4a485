//! Wiring & DI. Entry point: bootstrap adapters, inject into services, serve HTTP.
//! No business logic here; request handling is delegated to AnalysisService.

use dotenv::dotenv;
use post_sentiment::adapters::persistence::JsonFileStore;
use post_sentiment::adapters::sentiment::{HuggingFaceAdapter, LexiconAdapter};
use post_sentiment::adapters::source::JsonPlaceholderSource;
use post_sentiment::adapters::web::{WebState, start_http_server};
use post_sentiment::ports::{FormHandler, PostSource, ResultStore, SentimentModel};
use post_sentiment::shared::config::AppConfig;
use post_sentiment::usecases::{AnalysisService, ResultPersister, SentimentScorer};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let cfg = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "config could not be loaded, using defaults");
        AppConfig::default()
    });

    // --- Sentiment model: loaded once, shared read-only by every request ---
    let model: Arc<dyn SentimentModel> = if cfg.is_hf_configured() {
        info!(
            model = %cfg.hf_model_or_default(),
            url = %cfg.hf_api_url_or_default(),
            "sentiment analysis via Hugging Face Inference API"
        );
        Arc::new(HuggingFaceAdapter::new(
            cfg.hf_api_url_or_default(),
            cfg.hf_api_token.clone().unwrap_or_default(),
            cfg.hf_model_or_default(),
        ))
    } else {
        warn!("HF_API_TOKEN not set, using offline lexicon model");
        Arc::new(LexiconAdapter::new())
    };

    // --- Adapters ---
    let source: Arc<dyn PostSource> =
        Arc::new(JsonPlaceholderSource::new(cfg.api_base_url_or_default()));

    let output_dir = PathBuf::from(cfg.output_dir_or_default());
    let output_dir_abs = output_dir
        .canonicalize()
        .unwrap_or_else(|_| output_dir.clone());
    info!(path = %output_dir_abs.display(), "result files directory");
    let store: Arc<dyn ResultStore> = Arc::new(JsonFileStore::new(&output_dir));

    // --- Services ---
    let handler: Arc<dyn FormHandler> = Arc::new(AnalysisService::new(
        source,
        SentimentScorer::new(model),
        ResultPersister::new(store, cfg.file_prefix_or_default()),
        cfg.endpoint_or_default(),
    ));

    // --- Run ---
    start_http_server(
        WebState { handler },
        &cfg.host_or_default(),
        cfg.port_or_default(),
    )
    .await
}
