//! Nivaran Speech - audio transcription client.
//!
//! This crate wraps the external speech-to-text service behind the
//! [`Transcriber`] trait so the HTTP layer can hold one long-lived
//! client for the process lifetime and tests can inject doubles.
//! Transcription is the only fallible, latency-bearing collaborator in
//! the complaint pipeline; everything it can get wrong is captured in
//! [`TranscriptionError`].

pub mod error;
mod transcriber;

pub use error::{Result, TranscriptionError};
pub use transcriber::{
    HttpTranscriber, Transcriber, TranscriberConfig, DEFAULT_ENDPOINT, DEFAULT_LANGUAGE,
    DEFAULT_TIMEOUT,
};
