//! Error types for transcription.

use thiserror::Error;

/// Transcription error type.
#[derive(Debug, Error)]
pub enum TranscriptionError {
    /// The upload contained no audio bytes.
    #[error("empty audio upload")]
    EmptyAudio,

    /// The speech service could not be reached or timed out.
    #[error("speech service request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The speech service answered with a non-success status.
    #[error("speech service returned status {0}")]
    Status(u16),

    /// The audio was processed but no speech was recognized in it.
    #[error("no speech recognized in audio")]
    Unrecognized,
}

/// Result type for transcription operations.
pub type Result<T> = std::result::Result<T, TranscriptionError>;
