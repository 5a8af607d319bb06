//! Complaint classification for municipal triage.
//!
//! This module maps raw complaint text to a service category, a
//! sentiment label and, together with [`crate::rule_engine`], a
//! priority and resolution window.

mod category;
mod engine;
mod sentiment;

pub use category::{Category, CategoryTable};
pub use engine::{ClassificationEngine, ClassificationResult};
pub use sentiment::{
    LexiconScorer, PolarityScorer, SentimentLabel, NEGATIVE_LABEL_THRESHOLD,
    POSITIVE_LABEL_THRESHOLD,
};
