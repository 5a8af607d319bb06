//! Audio-to-text transcription client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{Result, TranscriptionError};

/// Default speech-to-text endpoint (a local STT sidecar).
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:7071/v1/transcribe";

/// Default language hint passed to the speech service.
pub const DEFAULT_LANGUAGE: &str = "en-IN";

/// Default per-request timeout. Transcription is the one slow call in
/// the pipeline; keep it bounded so a stuck service cannot pin a
/// request handler forever.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Turns recorded audio into text.
///
/// The one fallible, latency-bearing collaborator in the pipeline.
/// Implementations must be shareable across request handlers; the
/// server holds one instance for the process lifetime.
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribes raw audio bytes into text.
    async fn transcribe(&self, audio: &[u8]) -> Result<String>;
}

/// Configuration for [`HttpTranscriber`].
#[derive(Debug, Clone)]
pub struct TranscriberConfig {
    /// Speech service URL.
    pub endpoint: String,
    /// Language hint sent with each request.
    pub language: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for TranscriberConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl TranscriberConfig {
    /// Creates a config pointing at a specific endpoint.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }
}

/// Response payload from the speech service.
#[derive(Debug, Deserialize)]
struct TranscriptPayload {
    transcript: String,
}

/// HTTP speech-to-text client.
///
/// Posts the raw upload to the speech service and expects a
/// `{"transcript": "..."}` body back. One shared `reqwest::Client` is
/// built at construction and reused for every request.
pub struct HttpTranscriber {
    client: reqwest::Client,
    config: TranscriberConfig,
}

impl HttpTranscriber {
    /// Creates a client with the given configuration.
    pub fn new(config: TranscriberConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Creates a client with the default configuration.
    pub fn with_defaults() -> Self {
        Self::new(TranscriberConfig::default())
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &TranscriberConfig {
        &self.config
    }
}

#[async_trait]
impl Transcriber for HttpTranscriber {
    async fn transcribe(&self, audio: &[u8]) -> Result<String> {
        if audio.is_empty() {
            return Err(TranscriptionError::EmptyAudio);
        }

        debug!(
            bytes = audio.len(),
            endpoint = %self.config.endpoint,
            "Sending audio for transcription"
        );

        let response = self
            .client
            .post(&self.config.endpoint)
            .query(&[("lang", self.config.language.as_str())])
            .header(CONTENT_TYPE, "application/octet-stream")
            .timeout(self.config.timeout)
            .body(audio.to_vec())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Speech service rejected audio");
            return Err(TranscriptionError::Status(status.as_u16()));
        }

        let payload: TranscriptPayload = response.json().await?;
        let transcript = payload.transcript.trim();
        if transcript.is_empty() {
            return Err(TranscriptionError::Unrecognized);
        }

        debug!(chars = transcript.len(), "Transcription complete");
        Ok(transcript.to_string())
    }
}
