//! The text-to-decision classification pipeline.

use serde::Serialize;
use tracing::debug;

use crate::rule_engine::{Priority, PriorityRules, ResolutionWindow};

use super::category::{Category, CategoryTable};
use super::sentiment::{LexiconScorer, PolarityScorer, SentimentLabel};

/// Result of classifying one complaint.
///
/// Immutable once built; `original_text` carries the input string
/// unmodified.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationResult {
    pub category: Category,
    pub sentiment: SentimentLabel,
    pub priority: Priority,
    pub estimated_time: ResolutionWindow,
    pub original_text: String,
}

/// Classification pipeline: category, sentiment, priority, window.
///
/// The engine holds no mutable state and performs no I/O, so a single
/// instance can be shared behind an `Arc` across any number of request
/// handlers without locking. It is total over its input: any string,
/// including the empty one, produces a valid result.
pub struct ClassificationEngine {
    categories: CategoryTable,
    rules: PriorityRules,
    scorer: Box<dyn PolarityScorer>,
}

impl ClassificationEngine {
    /// Creates an engine with the default lexicon scorer.
    pub fn new() -> Self {
        Self::with_scorer(Box::new(LexiconScorer::new()))
    }

    /// Creates an engine with a custom polarity scorer.
    pub fn with_scorer(scorer: Box<dyn PolarityScorer>) -> Self {
        Self {
            categories: CategoryTable::new(),
            rules: PriorityRules::new(),
            scorer,
        }
    }

    /// Classifies a complaint.
    ///
    /// Empty or whitespace-only text yields General / Neutral / Low /
    /// "Within 1 Week".
    pub fn classify(&self, text: &str) -> ClassificationResult {
        let normalized = text.to_lowercase();

        let category = self.categories.detect(&normalized);
        let polarity = self.scorer.polarity(text);
        let sentiment = SentimentLabel::from_polarity(polarity);
        let priority = self.rules.evaluate(category, polarity, &normalized);
        let estimated_time = priority.resolution_window();

        debug!(
            category = category.name(),
            sentiment = sentiment.name(),
            priority = priority.name(),
            polarity,
            scorer = self.scorer.name(),
            "Complaint classified"
        );

        ClassificationResult {
            category,
            sentiment,
            priority,
            estimated_time,
            original_text: text.to_string(),
        }
    }
}

impl Default for ClassificationEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Scorer that always returns the same polarity.
    struct FixedScorer(f32);

    impl PolarityScorer for FixedScorer {
        fn polarity(&self, _text: &str) -> f32 {
            self.0
        }

        fn name(&self) -> &'static str {
            "fixed"
        }
    }

    fn engine() -> ClassificationEngine {
        ClassificationEngine::new()
    }

    #[test]
    fn empty_input_gets_the_quiet_defaults() {
        for text in ["", "   ", "\t\n"] {
            let result = engine().classify(text);
            assert_eq!(result.category, Category::General);
            assert_eq!(result.sentiment, SentimentLabel::Neutral);
            assert_eq!(result.priority, Priority::Low);
            assert_eq!(result.estimated_time, ResolutionWindow::WithinWeek);
            assert_eq!(result.original_text, text);
        }
    }

    #[test]
    fn original_text_is_preserved_verbatim() {
        let result = engine().classify("The STREETLIGHT Is Dead");
        assert_eq!(result.original_text, "The STREETLIGHT Is Dead");
        assert_eq!(result.category, Category::Electricity);
    }

    #[test]
    fn electricity_wins_the_cascade_over_water() {
        let result = engine().classify("leak near pole");
        assert_eq!(result.category, Category::Electricity);
    }

    #[test]
    fn cascade_and_urgency_compose() {
        // "pole" decides the category before any Water keyword is
        // reached; "blocked" independently decides the priority.
        let result = engine().classify("blocked pipe leak near pole");
        assert_eq!(result.category, Category::Electricity);
        assert_eq!(result.priority, Priority::High);
    }

    #[test]
    fn urgent_keyword_forces_high_despite_neutral_tone() {
        let result = engine().classify("minor spark near the wire");
        assert_eq!(result.category, Category::Electricity);
        assert_eq!(result.sentiment, SentimentLabel::Neutral);
        assert_eq!(result.priority, Priority::High);
        assert_eq!(result.estimated_time, ResolutionWindow::WithinHour);
    }

    #[test]
    fn police_complaints_dispatch_within_the_hour() {
        let result = engine().classify("someone stole my wallet at the market");
        assert_eq!(result.category, Category::Police);
        assert_eq!(result.priority, Priority::High);
        assert_eq!(result.estimated_time, ResolutionWindow::WithinHour);
    }

    #[test]
    fn strongly_negative_complaint_is_medium() {
        let result = engine().classify("the garbage dump is absolutely horrible and disgusting");
        assert_eq!(result.category, Category::Sanitation);
        assert_eq!(result.sentiment, SentimentLabel::Negative);
        assert_eq!(result.priority, Priority::Medium);
        assert_eq!(result.estimated_time, ResolutionWindow::WithinDay);
    }

    #[test]
    fn mild_complaint_is_low() {
        let result = engine().classify("the street sign near my house has faded");
        assert_eq!(result.category, Category::Roads);
        assert_eq!(result.priority, Priority::Low);
        assert_eq!(result.estimated_time, ResolutionWindow::WithinWeek);
    }

    #[test]
    fn classify_is_idempotent() {
        let e = engine();
        let text = "water leaking from the tap since monday";
        assert_eq!(e.classify(text), e.classify(text));
    }

    #[test]
    fn fixed_scorer_drives_the_medium_rule() {
        let e = ClassificationEngine::with_scorer(Box::new(FixedScorer(-0.7)));
        let result = e.classify("everything here is a mess");
        assert_eq!(result.category, Category::General);
        assert_eq!(result.sentiment, SentimentLabel::Negative);
        assert_eq!(result.priority, Priority::Medium);
    }

    #[test]
    fn fixed_scorer_at_the_threshold_stays_low() {
        let e = ClassificationEngine::with_scorer(Box::new(FixedScorer(-0.5)));
        let result = e.classify("everything here is a mess");
        assert_eq!(result.priority, Priority::Low);
    }

    #[test]
    fn result_serializes_with_wire_field_names() {
        let value = serde_json::to_value(engine().classify("minor spark near the wire")).unwrap();
        assert_eq!(value["category"], "Electricity");
        assert_eq!(value["sentiment"], "Neutral");
        assert_eq!(value["priority"], "High");
        assert_eq!(value["estimated_time"], "Within 1 Hour");
        assert_eq!(value["original_text"], "minor spark near the wire");
    }
}
