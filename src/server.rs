use std::sync::Arc;

use axum::Router;
use axum::extract::{Form, State};
use axum::response::Html;
use axum::routing::get;
use eyre::Result;
use log::info;
use serde::Deserialize;

use crate::pipeline::Pipeline;

const PAGE: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/static/index.html"));
const RESULT_MARKER: &str = "<!-- result -->";

struct AppState {
    pipeline: Pipeline,
}

#[derive(Deserialize)]
struct SummarizeForm {
    url: String,
}

/// Build the single-page app: the form lives at `/` and posts back to it.
pub fn router(pipeline: Pipeline) -> Router {
    let state = Arc::new(AppState { pipeline });

    Router::new()
        .route("/", get(index).post(summarize))
        .route("/health", get(health))
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn serve(bind: &str, pipeline: Pipeline) -> Result<()> {
    let app = router(pipeline);
    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!("listening on http://{bind}");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn health() -> &'static str {
    "OK"
}

async fn index() -> Html<String> {
    Html(render_page(None))
}

async fn summarize(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SummarizeForm>,
) -> Html<String> {
    info!("summarize request: {}", form.url);
    let output = state.pipeline.run(&form.url).await;
    Html(render_page(Some(&output)))
}

/// Substitute the outcome block for the page's result marker. The outcome is
/// plain text (summary or error line) and is escaped before it touches HTML.
fn render_page(output: Option<&str>) -> String {
    let block = match output {
        Some(text) => format!(
            "<section class=\"result\"><pre>{}</pre></section>",
            html_escape::encode_text(text)
        ),
        None => String::new(),
    };
    PAGE.replacen(RESULT_MARKER, &block, 1)
}
