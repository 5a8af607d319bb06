//! Municipal service categories and the keyword table that detects them.

use serde::{Deserialize, Serialize};

/// Municipal service categories a complaint can be routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Street lighting and power supply.
    Electricity,
    /// Supply, drainage, sewage and flooding.
    Water,
    /// Road surface, traffic and congestion.
    Roads,
    /// Garbage collection and cleanliness.
    Sanitation,
    /// Theft, safety and law-and-order.
    Police,
    /// Anything the keyword table does not recognize.
    General,
}

impl Category {
    /// Returns every category the detector can produce.
    pub fn all() -> &'static [Category] {
        &[
            Category::Electricity,
            Category::Water,
            Category::Roads,
            Category::Sanitation,
            Category::Police,
            Category::General,
        ]
    }

    /// Returns the display name for this category.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Electricity => "Electricity",
            Category::Water => "Water",
            Category::Roads => "Roads",
            Category::Sanitation => "Sanitation",
            Category::Police => "Police",
            Category::General => "General",
        }
    }
}

/// The decision table rows, in evaluation order.
const DEFAULT_TABLE: &[(Category, &[&str])] = &[
    (
        Category::Electricity,
        &[
            "light",
            "pole",
            "dark",
            "electricity",
            "power",
            "voltage",
            "wire",
            "spark",
        ],
    ),
    (
        Category::Water,
        &[
            "water", "drainage", "leak", "pipe", "sewage", "flood", "drink", "tap",
        ],
    ),
    (
        Category::Roads,
        &[
            "road", "pothole", "street", "asphalt", "traffic", "jam", "highway",
        ],
    ),
    (
        Category::Sanitation,
        &[
            "garbage", "trash", "dustbin", "waste", "clean", "smell", "dump",
        ],
    ),
    (
        Category::Police,
        &[
            "theft", "stole", "lost", "missing", "crime", "fight", "police", "robbery", "danger",
        ],
    ),
];

/// Ordered keyword table mapping complaint text to a category.
///
/// Rows are tested in a fixed order and the first row with any keyword
/// present wins, regardless of later matches. Matching is plain
/// substring matching over lower-cased text, so "fighting" matches
/// "fight" - that imprecision is part of the table's contract, not a
/// bug to fix.
pub struct CategoryTable {
    entries: &'static [(Category, &'static [&'static str])],
}

impl CategoryTable {
    /// Creates the default table.
    pub fn new() -> Self {
        Self {
            entries: DEFAULT_TABLE,
        }
    }

    /// The table rows in evaluation order.
    pub fn entries(&self) -> &'static [(Category, &'static [&'static str])] {
        self.entries
    }

    /// Returns the first (category, keyword) pair matching the
    /// normalized (lower-cased) text, if any.
    pub fn first_match(&self, normalized: &str) -> Option<(Category, &'static str)> {
        for (category, keywords) in self.entries {
            if let Some(keyword) = keywords.iter().copied().find(|k| normalized.contains(*k)) {
                return Some((*category, keyword));
            }
        }
        None
    }

    /// Detects the category for normalized (lower-cased) text.
    pub fn detect(&self, normalized: &str) -> Category {
        self.first_match(normalized)
            .map(|(category, _)| category)
            .unwrap_or(Category::General)
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> CategoryTable {
        CategoryTable::new()
    }

    #[test]
    fn all_returns_six_categories() {
        assert_eq!(Category::all().len(), 6);
    }

    #[test]
    fn category_names() {
        assert_eq!(Category::Electricity.name(), "Electricity");
        assert_eq!(Category::Sanitation.name(), "Sanitation");
        assert_eq!(Category::General.name(), "General");
    }

    #[test]
    fn category_serializes_as_variant_name() {
        assert_eq!(
            serde_json::to_string(&Category::Electricity).unwrap(),
            "\"Electricity\""
        );
        assert_eq!(
            serde_json::to_string(&Category::General).unwrap(),
            "\"General\""
        );
    }

    #[test]
    fn detects_each_category() {
        assert_eq!(table().detect("no power since morning"), Category::Electricity);
        assert_eq!(table().detect("sewage overflow in lane 4"), Category::Water);
        assert_eq!(table().detect("pothole outside the school"), Category::Roads);
        assert_eq!(table().detect("garbage not collected"), Category::Sanitation);
        assert_eq!(table().detect("my scooter was stolen"), Category::Police);
    }

    #[test]
    fn unmatched_text_is_general() {
        assert_eq!(table().detect("please plant more trees"), Category::General);
    }

    #[test]
    fn empty_text_is_general() {
        assert_eq!(table().detect(""), Category::General);
    }

    #[test]
    fn first_match_wins_across_rows() {
        // "pole" (Electricity) is tested before "leak"/"pipe" (Water).
        assert_eq!(table().detect("leak near pole"), Category::Electricity);
        assert_eq!(
            table().detect("blocked pipe leak near pole"),
            Category::Electricity
        );
        // Without the Electricity keyword, the same complaint is Water.
        assert_eq!(table().detect("blocked pipe leak"), Category::Water);
    }

    #[test]
    fn substring_matching_is_deliberate() {
        // "streetlight" contains "light"; "fighting" contains "fight".
        assert_eq!(table().detect("streetlight flickering"), Category::Electricity);
        assert_eq!(
            table().detect("people were fighting outside"),
            Category::Police
        );
    }

    #[test]
    fn first_match_reports_keyword() {
        let (category, keyword) = table().first_match("dark alley behind the market").unwrap();
        assert_eq!(category, Category::Electricity);
        assert_eq!(keyword, "dark");
    }

    #[test]
    fn table_order_is_fixed() {
        let entries = table().entries();
        let order: Vec<Category> = entries.iter().map(|(c, _)| *c).collect();
        assert_eq!(
            order,
            vec![
                Category::Electricity,
                Category::Water,
                Category::Roads,
                Category::Sanitation,
                Category::Police,
            ]
        );
    }

    #[test]
    fn general_has_no_keyword_row() {
        assert!(table()
            .entries()
            .iter()
            .all(|(c, _)| *c != Category::General));
    }
}
