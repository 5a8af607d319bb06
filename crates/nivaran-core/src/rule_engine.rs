//! Priority rules for complaint triage.
//!
//! ## Evaluation order
//!
//! 1. Urgent keywords and escalated categories - High, return immediately
//! 2. Strongly negative polarity - Medium
//! 3. Default Low
//!
//! A strict first-match cascade: the first matching rule determines the
//! priority. The keyword set, the escalated-category list and the
//! polarity threshold are data on [`PriorityRules`], so the cascade can
//! be audited and tested on its own.

use serde::{Deserialize, Serialize};

use crate::classifier::Category;

/// Polarity below which a complaint escalates to Medium (strict).
pub const DISTRESS_THRESHOLD: f32 = -0.5;

/// Keywords that mark a complaint urgent regardless of tone.
///
/// Matched as substrings of the normalized text, like the category
/// table.
const URGENT_KEYWORDS: &[&str] = &[
    "danger", "accident", "fire", "death", "blood", "broken", "blocked", "kill", "attack", "spark",
];

/// Category names dispatched at High priority.
///
/// Fire and Medical never come out of the category table; the entries
/// are retained so this list matches the published dispatch policy.
const ESCALATED_CATEGORIES: &[&str] = &["Police", "Fire", "Medical"];

/// Urgency of a complaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Returns the display name for this priority.
    pub fn name(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    /// The resolution window promised for this priority.
    pub fn resolution_window(&self) -> ResolutionWindow {
        match self {
            Priority::High => ResolutionWindow::WithinHour,
            Priority::Medium => ResolutionWindow::WithinDay,
            Priority::Low => ResolutionWindow::WithinWeek,
        }
    }
}

/// Resolution window promised to the citizen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResolutionWindow {
    #[serde(rename = "Within 1 Hour")]
    WithinHour,
    #[serde(rename = "Within 24 Hours")]
    WithinDay,
    #[serde(rename = "Within 1 Week")]
    WithinWeek,
    /// Only produced on the audio fallback path, never by the engine.
    #[serde(rename = "Unknown")]
    Unknown,
}

impl ResolutionWindow {
    /// Returns the display string for this window.
    pub fn name(&self) -> &'static str {
        match self {
            ResolutionWindow::WithinHour => "Within 1 Hour",
            ResolutionWindow::WithinDay => "Within 24 Hours",
            ResolutionWindow::WithinWeek => "Within 1 Week",
            ResolutionWindow::Unknown => "Unknown",
        }
    }
}

/// The priority cascade, evaluated first-match-wins.
#[derive(Debug, Clone)]
pub struct PriorityRules {
    urgent_keywords: &'static [&'static str],
    escalated_categories: &'static [&'static str],
    distress_threshold: f32,
}

impl PriorityRules {
    /// Creates the default rule set.
    pub fn new() -> Self {
        Self {
            urgent_keywords: URGENT_KEYWORDS,
            escalated_categories: ESCALATED_CATEGORIES,
            distress_threshold: DISTRESS_THRESHOLD,
        }
    }

    /// The urgent keyword set, in evaluation order.
    pub fn urgent_keywords(&self) -> &'static [&'static str] {
        self.urgent_keywords
    }

    /// Category names that always dispatch at High priority.
    pub fn escalated_categories(&self) -> &'static [&'static str] {
        self.escalated_categories
    }

    /// Returns the first urgent keyword present in the normalized
    /// (lower-cased) text, if any.
    pub fn urgent_match(&self, normalized: &str) -> Option<&'static str> {
        self.urgent_keywords
            .iter()
            .copied()
            .find(|k| normalized.contains(*k))
    }

    /// Evaluates the cascade for a detected category, a polarity score
    /// and the normalized text.
    pub fn evaluate(&self, category: Category, polarity: f32, normalized: &str) -> Priority {
        if self.urgent_match(normalized).is_some()
            || self.escalated_categories.contains(&category.name())
        {
            Priority::High
        } else if polarity < self.distress_threshold {
            Priority::Medium
        } else {
            Priority::Low
        }
    }
}

impl Default for PriorityRules {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> PriorityRules {
        PriorityRules::new()
    }

    #[test]
    fn urgent_keyword_beats_positive_tone() {
        // Cascade order: the urgency rule fires before polarity is consulted.
        let p = rules().evaluate(Category::General, 0.9, "a great big fire near the park");
        assert_eq!(p, Priority::High);
    }

    #[test]
    fn urgent_keywords_match_as_substrings() {
        assert_eq!(rules().urgent_match("the drain is completely blockedup"), Some("blocked"));
        assert_eq!(rules().urgent_match("all calm here"), None);
    }

    #[test]
    fn police_category_escalates() {
        let p = rules().evaluate(Category::Police, 0.0, "someone took my cycle");
        assert_eq!(p, Priority::High);
    }

    #[test]
    fn only_police_escalates_among_producible_categories() {
        for category in Category::all() {
            let expected = if *category == Category::Police {
                Priority::High
            } else {
                Priority::Low
            };
            assert_eq!(
                rules().evaluate(*category, 0.0, "nothing of note here"),
                expected,
                "category {:?}",
                category
            );
        }
    }

    #[test]
    fn escalated_list_keeps_fire_and_medical() {
        // Dead entries by construction: no producible category carries
        // these names, and that parity is deliberate.
        let list = rules().escalated_categories();
        assert!(list.contains(&"Fire"));
        assert!(list.contains(&"Medical"));
        assert!(!Category::all().iter().any(|c| c.name() == "Fire"));
        assert!(!Category::all().iter().any(|c| c.name() == "Medical"));
    }

    #[test]
    fn strongly_negative_polarity_is_medium() {
        let p = rules().evaluate(Category::Sanitation, -0.7, "everything is awful here");
        assert_eq!(p, Priority::Medium);
    }

    #[test]
    fn distress_threshold_is_strict() {
        assert_eq!(
            rules().evaluate(Category::General, -0.5, "plain text"),
            Priority::Low
        );
        assert_eq!(
            rules().evaluate(Category::General, -0.51, "plain text"),
            Priority::Medium
        );
    }

    #[test]
    fn default_is_low() {
        let p = rules().evaluate(Category::Roads, 0.3, "the new surface is fine");
        assert_eq!(p, Priority::Low);
    }

    #[test]
    fn window_mapping_is_total() {
        assert_eq!(
            Priority::High.resolution_window(),
            ResolutionWindow::WithinHour
        );
        assert_eq!(
            Priority::Medium.resolution_window(),
            ResolutionWindow::WithinDay
        );
        assert_eq!(
            Priority::Low.resolution_window(),
            ResolutionWindow::WithinWeek
        );
    }

    #[test]
    fn window_serializes_to_display_strings() {
        assert_eq!(
            serde_json::to_string(&ResolutionWindow::WithinHour).unwrap(),
            "\"Within 1 Hour\""
        );
        assert_eq!(
            serde_json::to_string(&ResolutionWindow::WithinDay).unwrap(),
            "\"Within 24 Hours\""
        );
        assert_eq!(
            serde_json::to_string(&ResolutionWindow::WithinWeek).unwrap(),
            "\"Within 1 Week\""
        );
        assert_eq!(
            serde_json::to_string(&ResolutionWindow::Unknown).unwrap(),
            "\"Unknown\""
        );
    }

    #[test]
    fn priority_serializes_as_variant_name() {
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"High\"");
    }
}
