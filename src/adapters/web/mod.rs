//! HTTP adapter. Serves the form on `/` and forwards submissions to the FormHandler port.

pub mod page;

use crate::domain::{AnalyzeForm, PageView};
use crate::ports::FormHandler;
use axum::{
    Form, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
};
use std::sync::Arc;
use tracing::info;

/// Shared HTTP server state
#[derive(Clone)]
pub struct WebState {
    pub handler: Arc<dyn FormHandler>,
}

/// Build the router: `GET /` renders the empty form, `POST /` processes it.
pub fn build_router(state: WebState) -> Router {
    Router::new()
        .route("/", get(index).post(submit))
        .route("/health", get(health_check))
        .with_state(state)
}

async fn index() -> Html<String> {
    Html(page::render(&PageView::display()))
}

/// A body that is not form-encoded is treated as an empty form, so every POST renders.
async fn submit(
    State(state): State<WebState>,
    form: Option<Form<AnalyzeForm>>,
) -> Html<String> {
    let form = form.map(|Form(f)| f).unwrap_or_default();
    let view = state.handler.handle(form).await;
    Html(page::render(&view))
}

async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Start the HTTP listener and serve until the process stops.
pub async fn start_http_server(state: WebState, host: &str, port: u16) -> anyhow::Result<()> {
    let app = build_router(state);
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Starting HTTP server on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("HTTP server error: {}", e))?;

    Ok(())
}
