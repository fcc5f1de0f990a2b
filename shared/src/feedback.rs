//! Feedback classification
//!
//! Maps the numeric metrics onto discrete feedback: a BMI category, a
//! performance tier for the session, and a random pick of suggestions for
//! the matched category.

use crate::catalog::{Suggestion, SuggestionCatalog};
use rand::seq::index;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Number of suggestions returned per assessment
pub const DEFAULT_SUGGESTION_COUNT: usize = 3;

// ============================================================================
// BMI Category
// ============================================================================

/// BMI category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub const ALL: [BmiCategory; 4] = [
        BmiCategory::Underweight,
        BmiCategory::Normal,
        BmiCategory::Overweight,
        BmiCategory::Obese,
    ];

    /// Get the BMI range for this category (lower bound inclusive)
    pub fn range(&self) -> (f64, f64) {
        match self {
            BmiCategory::Underweight => (0.0, 18.5),
            BmiCategory::Normal => (18.5, 25.0),
            BmiCategory::Overweight => (25.0, 30.0),
            BmiCategory::Obese => (30.0, f64::INFINITY),
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    fn key(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "underweight",
            BmiCategory::Normal => "normal",
            BmiCategory::Overweight => "overweight",
            BmiCategory::Obese => "obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for BmiCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        BmiCategory::ALL
            .iter()
            .copied()
            .find(|c| c.key() == normalized)
            .ok_or_else(|| format!("Unknown BMI category: {}", s))
    }
}

/// Classify BMI into category
///
/// A value sitting exactly on a boundary belongs to the heavier category.
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

// ============================================================================
// Performance Tier
// ============================================================================

/// Session performance based on calories burned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PerformanceTier {
    Low,
    Moderate,
    High,
}

impl PerformanceTier {
    /// Feedback text shown for this tier
    pub fn message(&self) -> &'static str {
        match self {
            PerformanceTier::Low => {
                "Keep Going! Try a quick run, yoga, or a short HIIT session to boost results."
            }
            PerformanceTier::Moderate => {
                "Great job! You're burning energy. Push a bit harder with cardio or weights."
            }
            PerformanceTier::High => {
                "Excellent! You're smashing your goal. Keep pushing with HIIT or advanced training."
            }
        }
    }
}

impl fmt::Display for PerformanceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PerformanceTier::Low => f.write_str("low"),
            PerformanceTier::Moderate => f.write_str("moderate"),
            PerformanceTier::High => f.write_str("high"),
        }
    }
}

/// Classify calories burned into a performance tier
///
/// Only meaningful for sessions with a duration; callers branch on the
/// presence of `calories_burned` first.
pub fn classify_performance(calories_burned: f64) -> PerformanceTier {
    if calories_burned < 150.0 {
        PerformanceTier::Low
    } else if calories_burned < 400.0 {
        PerformanceTier::Moderate
    } else {
        PerformanceTier::High
    }
}

// ============================================================================
// Classifier
// ============================================================================

/// Feedback classifier bound to a read-only suggestion catalog
///
/// Cloning is cheap: the catalog is shared behind an `Arc`.
#[derive(Debug, Clone)]
pub struct FeedbackClassifier {
    catalog: Arc<SuggestionCatalog>,
}

impl FeedbackClassifier {
    pub fn new(catalog: Arc<SuggestionCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &SuggestionCatalog {
        &self.catalog
    }

    pub fn classify_bmi(&self, bmi: f64) -> BmiCategory {
        classify_bmi(bmi)
    }

    pub fn classify_performance(&self, calories_burned: f64) -> PerformanceTier {
        classify_performance(calories_burned)
    }

    /// Draw up to `k` distinct suggestions for a category, in random order
    ///
    /// The randomness source is supplied by the caller; pass
    /// `rand::thread_rng()` for the process-wide stream or a seeded RNG for
    /// reproducible output.
    pub fn select_suggestions<R: Rng + ?Sized>(
        &self,
        category: BmiCategory,
        k: usize,
        rng: &mut R,
    ) -> Vec<Suggestion> {
        let entries = self.catalog.entries(category);
        let amount = k.min(entries.len());
        index::sample(rng, entries.len(), amount)
            .into_iter()
            .map(|i| entries[i].clone())
            .collect()
    }
}

impl Default for FeedbackClassifier {
    fn default() -> Self {
        Self::new(Arc::new(SuggestionCatalog::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rstest::rstest;
    use std::collections::HashSet;

    // =========================================================================
    // Classification Tests
    // =========================================================================

    #[rstest]
    #[case(17.999, BmiCategory::Underweight)]
    #[case(18.5, BmiCategory::Normal)]
    #[case(24.999, BmiCategory::Normal)]
    #[case(25.0, BmiCategory::Overweight)]
    #[case(29.999, BmiCategory::Overweight)]
    #[case(30.0, BmiCategory::Obese)]
    #[case(45.0, BmiCategory::Obese)]
    fn test_bmi_boundaries(#[case] bmi: f64, #[case] expected: BmiCategory) {
        assert_eq!(classify_bmi(bmi), expected);
    }

    #[rstest]
    #[case(0.5, PerformanceTier::Low)]
    #[case(149.999, PerformanceTier::Low)]
    #[case(150.0, PerformanceTier::Moderate)]
    #[case(399.999, PerformanceTier::Moderate)]
    #[case(400.0, PerformanceTier::High)]
    fn test_performance_boundaries(#[case] kcal: f64, #[case] expected: PerformanceTier) {
        assert_eq!(classify_performance(kcal), expected);
    }

    #[test]
    fn test_category_parse_and_display() {
        for category in BmiCategory::ALL {
            assert_eq!(category.to_string().parse::<BmiCategory>(), Ok(category));
        }
        assert_eq!("OBESE".parse::<BmiCategory>(), Ok(BmiCategory::Obese));
        assert!("athletic".parse::<BmiCategory>().is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: a BMI falls inside the range of its own category
        #[test]
        fn prop_bmi_within_category_range(bmi in 5.0f64..80.0) {
            let (low, high) = classify_bmi(bmi).range();
            prop_assert!(bmi >= low && bmi < high);
        }
    }

    // =========================================================================
    // Suggestion Sampling Tests
    // =========================================================================

    fn classifier_with_normal(entries: usize) -> FeedbackClassifier {
        let mut catalog = SuggestionCatalog::default();
        catalog.normal = (0..entries)
            .map(|i| Suggestion::new(&format!("Workout {}", i), &format!("https://example.com/{}", i)))
            .collect();
        FeedbackClassifier::new(Arc::new(catalog))
    }

    #[test]
    fn test_selects_three_by_default_size() {
        let classifier = FeedbackClassifier::default();
        let mut rng = StdRng::seed_from_u64(7);
        let picks = classifier.select_suggestions(BmiCategory::Obese, DEFAULT_SUGGESTION_COUNT, &mut rng);
        assert_eq!(picks.len(), 3);
        for pick in &picks {
            assert!(classifier.catalog().obese.contains(pick));
        }
    }

    #[test]
    fn test_never_exceeds_category_size() {
        let classifier = classifier_with_normal(2);
        let mut rng = StdRng::seed_from_u64(1);
        let picks = classifier.select_suggestions(BmiCategory::Normal, 3, &mut rng);
        assert_eq!(picks.len(), 2);
    }

    #[test]
    fn test_zero_requested_returns_nothing() {
        let classifier = FeedbackClassifier::default();
        let picks = classifier.select_suggestions(BmiCategory::Normal, 0, &mut rand::thread_rng());
        assert!(picks.is_empty());
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let classifier = classifier_with_normal(10);
        let first = classifier.select_suggestions(BmiCategory::Normal, 3, &mut StdRng::seed_from_u64(42));
        let second = classifier.select_suggestions(BmiCategory::Normal, 3, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn test_accepts_mock_rng() {
        let classifier = classifier_with_normal(5);
        let mut rng = StepRng::new(0, 1);
        let picks = classifier.select_suggestions(BmiCategory::Normal, 3, &mut rng);
        assert_eq!(picks.len(), 3);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: a draw has no duplicates and is bounded by min(k, len)
        #[test]
        fn prop_sample_distinct_and_bounded(entries in 1usize..20, k in 0usize..25, seed in any::<u64>()) {
            let classifier = classifier_with_normal(entries);
            let mut rng = StdRng::seed_from_u64(seed);
            let picks = classifier.select_suggestions(BmiCategory::Normal, k, &mut rng);

            prop_assert_eq!(picks.len(), k.min(entries));
            let unique: HashSet<_> = picks.iter().collect();
            prop_assert_eq!(unique.len(), picks.len());
        }
    }
}
