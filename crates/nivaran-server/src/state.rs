//! Application state for the API server.

use std::sync::Arc;

use nivaran_core::ClassificationEngine;
use nivaran_speech::Transcriber;

/// Shared application state.
///
/// The engine is pure and lock-free, so both fields are plain `Arc`s;
/// cloning the state per request is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Classification engine.
    pub engine: Arc<ClassificationEngine>,
    /// Long-lived transcription client, constructed once at startup.
    pub transcriber: Arc<dyn Transcriber>,
}

impl AppState {
    /// Creates state around a transcriber, with the default engine.
    pub fn new(transcriber: Arc<dyn Transcriber>) -> Self {
        Self {
            engine: Arc::new(ClassificationEngine::new()),
            transcriber,
        }
    }

    /// Creates state with a custom engine.
    pub fn with_engine(engine: ClassificationEngine, transcriber: Arc<dyn Transcriber>) -> Self {
        Self {
            engine: Arc::new(engine),
            transcriber,
        }
    }
}
