//! API route handlers.

use axum::extract::{Multipart, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{debug, info, warn};

use crate::models::{AudioFallbackResponse, ClassifyResponse, HealthResponse, TextRequest};
use crate::state::AppState;

/// GET / - health check.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "grievance engine active",
    })
}

/// POST /predict-category - classify complaint text.
pub async fn predict_category(
    State(state): State<AppState>,
    Json(req): Json<TextRequest>,
) -> Json<ClassifyResponse> {
    debug!(
        description_len = req.description.len(),
        "Classifying complaint text"
    );

    let result = state.engine.classify(&req.description);

    info!(
        category = result.category.name(),
        priority = result.priority.name(),
        "Complaint classified"
    );

    Json(ClassifyResponse::from(result))
}

/// POST /predict-audio - transcribe an uploaded clip, then classify.
///
/// Every failure on this path is absorbed here and answered with the
/// fixed fallback record: the caller always receives a well-formed
/// classification structure, never a raw fault.
pub async fn predict_audio(State(state): State<AppState>, multipart: Multipart) -> Response {
    let audio = match read_audio_field(multipart).await {
        Ok(audio) => audio,
        Err(message) => return audio_fallback(message),
    };

    debug!(bytes = audio.len(), "Received audio upload");

    match state.transcriber.transcribe(&audio).await {
        Ok(text) => {
            info!(chars = text.len(), "Audio transcribed");
            Json(ClassifyResponse::from(state.engine.classify(&text))).into_response()
        }
        Err(err) => audio_fallback(err.to_string()),
    }
}

/// Pulls the bytes of the `file` field out of the multipart body.
async fn read_audio_field(mut multipart: Multipart) -> Result<Vec<u8>, String> {
    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                if field.name() == Some("file") {
                    return match field.bytes().await {
                        Ok(bytes) => Ok(bytes.to_vec()),
                        Err(err) => Err(format!("failed to read audio upload: {err}")),
                    };
                }
                // Unrelated form field, keep scanning.
            }
            Ok(None) => return Err("missing audio file field".to_string()),
            Err(err) => return Err(format!("malformed multipart body: {err}")),
        }
    }
}

fn audio_fallback(message: String) -> Response {
    warn!(error = %message, "Audio request failed, returning fallback record");
    Json(AudioFallbackResponse::from_error(message)).into_response()
}
