use async_trait::async_trait;
use eyre::{Result, bail};
use log::debug;

use crate::pipeline::Summarizer;

const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

const SUMMARY_PROMPT: &str = "You are a professional text summarizer, you read the input text given to you \
and then return the summarized version of the text while keeping the meaning relevant and accurate. \
Please provide the accurate summarization of the context given to you";

/// Summarizes transcript text through an OpenAI-compatible chat-completions
/// endpoint. Groq hosts the default model; `gpt*` models route to OpenAI.
pub struct ChatSummarizer {
    client: reqwest::Client,
    model: String,
    groq_api_key: Option<String>,
    openai_api_key: Option<String>,
}

impl ChatSummarizer {
    pub fn new(
        client: reqwest::Client,
        model: impl Into<String>,
        groq_api_key: Option<String>,
        openai_api_key: Option<String>,
    ) -> Self {
        Self {
            client,
            model: model.into(),
            groq_api_key,
            openai_api_key,
        }
    }
}

fn is_openai_model(model: &str) -> bool {
    model.starts_with("gpt")
}

fn build_prompt(transcript_text: &str) -> String {
    format!("{SUMMARY_PROMPT}\n<context>\n{transcript_text}")
}

fn extract_message_text(json: &serde_json::Value) -> Result<String> {
    if let Some(text) = json
        .get("choices")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("message"))
        .and_then(|m| m.get("content"))
        .and_then(|t| t.as_str())
    {
        return Ok(text.to_string());
    }
    bail!("unexpected chat completion response format");
}

#[async_trait]
impl Summarizer for ChatSummarizer {
    async fn summarize(&self, transcript_text: &str) -> Result<String> {
        let (api_url, api_key) = if is_openai_model(&self.model) {
            let key = self.openai_api_key.as_deref().ok_or_else(|| {
                eyre::eyre!(
                    "OPENAI_API_KEY environment variable not set (required for model {})",
                    self.model
                )
            })?;
            (OPENAI_API_URL, key)
        } else {
            let key = self.groq_api_key.as_deref().ok_or_else(|| {
                eyre::eyre!(
                    "GROQ_API_KEY environment variable not set (required for model {})",
                    self.model
                )
            })?;
            (GROQ_API_URL, key)
        };

        debug!("requesting summary from {api_url} with model {}", self.model);

        let body = serde_json::json!({
            "model": self.model,
            "messages": [
                {
                    "role": "user",
                    "content": build_prompt(transcript_text)
                }
            ]
        });

        let resp = self
            .client
            .post(api_url)
            .bearer_auth(api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("summarization API returned {status}: {body}");
        }

        let json: serde_json::Value = resp.json().await?;
        extract_message_text(&json)
    }
}
