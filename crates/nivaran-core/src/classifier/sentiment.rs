//! Polarity scoring and sentiment labels.
//!
//! The engine consumes polarity through the [`PolarityScorer`] trait;
//! the shipped implementation is [`LexiconScorer`], a deterministic
//! lexicon walk with intensifier and negation handling. Scores live in
//! [-1.0, 1.0] and quantize to a three-way label.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// Polarity below which text is labeled Negative (strict).
pub const NEGATIVE_LABEL_THRESHOLD: f32 = -0.1;

/// Polarity above which text is labeled Positive (strict).
pub const POSITIVE_LABEL_THRESHOLD: f32 = 0.1;

/// Quantized tone of a complaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// Quantizes a polarity score in [-1.0, 1.0].
    ///
    /// Both thresholds are strict: -0.1, 0.0 and 0.1 all quantize to
    /// Neutral.
    pub fn from_polarity(score: f32) -> Self {
        if score < NEGATIVE_LABEL_THRESHOLD {
            SentimentLabel::Negative
        } else if score > POSITIVE_LABEL_THRESHOLD {
            SentimentLabel::Positive
        } else {
            SentimentLabel::Neutral
        }
    }

    /// Returns the display name for this label.
    pub fn name(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Negative => "Negative",
        }
    }
}

/// Source of polarity scores for the classification engine.
///
/// Implementations must be deterministic; the engine's output is a
/// pure function of its input only as long as the scorer's is.
pub trait PolarityScorer: Send + Sync {
    /// Scores `text` in [-1.0, 1.0] (very negative to very positive).
    fn polarity(&self, text: &str) -> f32;

    /// Returns the name of this scorer for logging.
    fn name(&self) -> &'static str;
}

/// Word entry in the polarity lexicon.
struct LexiconEntry {
    /// Valence score (-1.0 to 1.0).
    valence: f32,
    /// Weight of this word in the average.
    weight: f32,
}

/// Lexicon-based polarity scorer.
///
/// Computes a weight-normalized average of per-word valences, with
/// intensifier words boosting the following sentiment word and
/// negation words flipping and dampening sentiment within a 3-word
/// window. The result is clamped to [-1.0, 1.0]; text containing no
/// lexicon words scores exactly 0.0.
pub struct LexiconScorer {
    lexicon: HashMap<String, LexiconEntry>,
    intensifiers: HashMap<String, f32>,
    negations: HashSet<String>,
}

impl LexiconScorer {
    /// Creates a scorer with the default complaint-register lexicon.
    pub fn new() -> Self {
        let mut scorer = Self {
            lexicon: HashMap::new(),
            intensifiers: HashMap::new(),
            negations: HashSet::new(),
        };
        scorer.load_lexicon();
        scorer.load_intensifiers();
        scorer.load_negations();
        scorer
    }

    fn load_lexicon(&mut self) {
        let negative = [
            ("terrible", -0.7, 0.9),
            ("awful", -0.7, 0.9),
            ("horrible", -0.8, 1.0),
            ("disgusting", -0.7, 0.9),
            ("unbearable", -0.8, 1.0),
            ("filthy", -0.7, 0.9),
            ("stinking", -0.7, 0.9),
            ("stench", -0.7, 0.9),
            ("dirty", -0.6, 0.8),
            ("overflowing", -0.5, 0.7),
            ("angry", -0.7, 0.9),
            ("furious", -0.9, 1.1),
            ("frustrated", -0.6, 0.8),
            ("annoyed", -0.5, 0.7),
            ("upset", -0.6, 0.8),
            ("worst", -0.8, 1.0),
            ("bad", -0.5, 0.7),
            ("poor", -0.5, 0.7),
            ("pathetic", -0.7, 0.9),
            ("useless", -0.7, 0.9),
            ("hopeless", -0.8, 1.0),
            ("ignored", -0.6, 0.8),
            ("delayed", -0.4, 0.6),
            ("slow", -0.4, 0.6),
            ("unsafe", -0.7, 0.9),
            ("dangerous", -0.8, 1.0),
            ("broken", -0.7, 1.0),
            ("scared", -0.6, 0.8),
            ("afraid", -0.6, 0.8),
            ("miserable", -0.8, 1.0),
            ("nightmare", -0.8, 1.0),
            ("shameful", -0.7, 0.9),
            ("ridiculous", -0.6, 0.8),
            ("unacceptable", -0.7, 0.9),
        ];

        let positive = [
            ("good", 0.6, 0.8),
            ("great", 0.7, 0.9),
            ("excellent", 0.8, 1.0),
            ("wonderful", 0.8, 1.0),
            ("fantastic", 0.8, 1.0),
            ("happy", 0.8, 1.0),
            ("satisfied", 0.7, 0.9),
            ("thank", 0.6, 0.8),
            ("thanks", 0.6, 0.8),
            ("grateful", 0.7, 0.9),
            ("appreciate", 0.7, 0.9),
            ("helpful", 0.6, 0.8),
            ("prompt", 0.5, 0.7),
            ("quick", 0.4, 0.6),
            ("resolved", 0.6, 0.8),
            ("fixed", 0.5, 0.7),
            ("nice", 0.5, 0.7),
            ("kind", 0.6, 0.8),
            ("smooth", 0.5, 0.7),
            ("timely", 0.5, 0.7),
        ];

        for (word, valence, weight) in negative.into_iter().chain(positive) {
            self.lexicon
                .insert(word.to_string(), LexiconEntry { valence, weight });
        }
    }

    fn load_intensifiers(&mut self) {
        let intensifiers = [
            ("very", 1.3),
            ("really", 1.3),
            ("extremely", 1.5),
            ("absolutely", 1.5),
            ("totally", 1.3),
            ("so", 1.2),
            ("completely", 1.4),
            ("utterly", 1.4),
            ("terribly", 1.4),
            ("deeply", 1.3),
        ];

        for (word, boost) in intensifiers {
            self.intensifiers.insert(word.to_string(), boost);
        }
    }

    fn load_negations(&mut self) {
        let negations = [
            "not", "no", "never", "none", "nobody", "nothing", "neither", "nowhere", "cannot",
            "can't", "don't", "doesn't", "didn't", "won't", "wouldn't", "couldn't", "shouldn't",
            "isn't", "aren't", "wasn't", "weren't", "haven't", "hasn't", "hadn't",
        ];

        for word in negations {
            self.negations.insert(word.to_string());
        }
    }
}

impl PolarityScorer for LexiconScorer {
    fn polarity(&self, text: &str) -> f32 {
        let lowered = text.to_lowercase();

        let mut total_score = 0.0;
        let mut total_weight = 0.0;
        let mut negation_active = false;
        let mut negation_distance = 0;
        let mut pending_intensifier = 1.0f32;

        for raw in lowered.split_whitespace() {
            let word = raw.trim_matches(|c: char| !c.is_alphanumeric());
            if word.is_empty() {
                continue;
            }

            if self.negations.contains(word) {
                negation_active = true;
                negation_distance = 0;
                continue;
            }

            // Intensifiers boost the next sentiment word.
            if let Some(&boost) = self.intensifiers.get(word) {
                pending_intensifier = boost;
                continue;
            }

            if let Some(entry) = self.lexicon.get(word) {
                let mut score = entry.valence * entry.weight * pending_intensifier;

                // Negation flips and dampens within a 3-word window.
                if negation_active && negation_distance < 3 {
                    score = -score * 0.7;
                }

                total_score += score;
                total_weight += entry.weight;
                pending_intensifier = 1.0;
            }

            if negation_active {
                negation_distance += 1;
                if negation_distance >= 3 {
                    negation_active = false;
                }
            }
        }

        if total_weight > 0.0 {
            (total_score / total_weight).clamp(-1.0, 1.0)
        } else {
            0.0
        }
    }

    fn name(&self) -> &'static str {
        "lexicon"
    }
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}
