use eyre::Result;
use log::{debug, info};

use ytsum::config::Config;
use ytsum::pipeline::Pipeline;
use ytsum::server;
use ytsum::summarize::ChatSummarizer;
use ytsum::youtube::InnerTubeClient;

fn setup_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    setup_logging();

    // Config file is optional; defaults cover everything.
    let config = Config::load().unwrap_or_default();
    let config_path = ytsum::config::config_path();
    if config_path.exists() {
        debug!("config: {}", config_path.display());
    }

    let groq_api_key = std::env::var("GROQ_API_KEY").ok();
    let openai_api_key = std::env::var("OPENAI_API_KEY").ok();
    if groq_api_key.is_none() && openai_api_key.is_none() {
        info!("no GROQ_API_KEY or OPENAI_API_KEY set; summarization requests will fail");
    }

    let client = reqwest::Client::new();
    let transcripts = InnerTubeClient::new(client.clone(), config.lang());
    let summarizer = ChatSummarizer::new(client, config.model(), groq_api_key, openai_api_key);
    let pipeline = Pipeline::new(Box::new(transcripts), Box::new(summarizer));

    info!("model: {}", config.model());
    server::serve(config.bind(), pipeline).await
}
