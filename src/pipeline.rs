use async_trait::async_trait;
use eyre::{Result, bail};
use log::{debug, info, warn};

use crate::{Transcript, extract_video_id};

/// Shown when no video ID can be pulled out of the submitted input.
/// A handled outcome, not a failure.
pub const MISSING_VIDEO_ID: &str = "Video ID could not be extracted :| ";

/// Source of caption tracks for a video ID
#[async_trait]
pub trait TranscriptProvider: Send + Sync {
    async fn fetch(&self, video_id: &str) -> Result<Transcript>;
}

/// Hosted model that condenses transcript text into a summary
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, transcript_text: &str) -> Result<String>;
}

/// URL-to-summary pipeline. Owns the two collaborator clients, constructed
/// once at startup and injected here.
pub struct Pipeline {
    transcripts: Box<dyn TranscriptProvider>,
    summarizer: Box<dyn Summarizer>,
}

impl Pipeline {
    pub fn new(transcripts: Box<dyn TranscriptProvider>, summarizer: Box<dyn Summarizer>) -> Self {
        Self {
            transcripts,
            summarizer,
        }
    }

    /// Run the full pipeline for one submitted URL, mapping every outcome to
    /// the string shown to the user: the summary, the fixed no-ID message, or
    /// an error line carrying the failure's description.
    pub async fn run(&self, url: &str) -> String {
        let Some(video_id) = extract_video_id(url) else {
            debug!("no video ID found in input: {url}");
            return MISSING_VIDEO_ID.to_string();
        };

        info!("summarizing video {video_id}");
        match self.summarize_video(&video_id).await {
            Ok(summary) => summary,
            Err(err) => {
                warn!("pipeline failed for {video_id}: {err}");
                format!("Error occured: {err}")
            }
        }
    }

    async fn summarize_video(&self, video_id: &str) -> Result<String> {
        let transcript = self.transcripts.fetch(video_id).await?;
        let text = transcript.plain_text();
        debug!(
            "transcript for {video_id}: {} captions, {} chars",
            transcript.captions.len(),
            text.len()
        );

        // A track can exist yet carry no text. Nothing to summarize.
        if text.is_empty() {
            bail!("transcript for video {video_id} contains no text");
        }

        self.summarizer.summarize(&text).await
    }
}
