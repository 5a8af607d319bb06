//! API request and response models.

use nivaran_core::classifier::{Category, ClassificationResult, SentimentLabel};
use nivaran_core::rule_engine::{Priority, ResolutionWindow};
use serde::{Deserialize, Serialize};

/// Response body for GET /.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Request body for POST /predict-category.
#[derive(Debug, Deserialize)]
pub struct TextRequest {
    /// The complaint text to classify.
    pub description: String,
}

/// Response body for a successful classification.
#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub category: Category,
    pub sentiment: SentimentLabel,
    pub priority: Priority,
    pub estimated_time: ResolutionWindow,
    pub original_text: String,
}

impl From<ClassificationResult> for ClassifyResponse {
    fn from(result: ClassificationResult) -> Self {
        Self {
            category: result.category,
            sentiment: result.sentiment,
            priority: result.priority,
            estimated_time: result.estimated_time,
            original_text: result.original_text,
        }
    }
}

/// Fixed-shape record returned when the audio path fails.
///
/// Unlike [`ClassifyResponse`] it carries no sentiment field, and its
/// `original_text` is always the literal "Audio Error".
#[derive(Debug, Serialize)]
pub struct AudioFallbackResponse {
    pub error: String,
    pub category: Category,
    pub priority: Priority,
    pub estimated_time: ResolutionWindow,
    pub original_text: String,
}

impl AudioFallbackResponse {
    /// Builds the fallback record for a failed audio request.
    pub fn from_error(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            category: Category::General,
            priority: Priority::Low,
            estimated_time: ResolutionWindow::Unknown,
            original_text: "Audio Error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_record_has_fixed_shape() {
        let fallback = AudioFallbackResponse::from_error("decode failed");
        let value = serde_json::to_value(&fallback).unwrap();
        assert_eq!(value["error"], "decode failed");
        assert_eq!(value["category"], "General");
        assert_eq!(value["priority"], "Low");
        assert_eq!(value["estimated_time"], "Unknown");
        assert_eq!(value["original_text"], "Audio Error");
        assert!(value.get("sentiment").is_none());
    }
}
