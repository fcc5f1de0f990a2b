//! Suggestion catalog
//!
//! Video suggestions grouped by BMI category. The catalog is read-only once
//! built and is validated when it is loaded, so request handling can assume
//! every category has at least one entry.

use crate::errors::CatalogError;
use crate::feedback::BmiCategory;
use serde::{Deserialize, Serialize};

/// A single exercise suggestion
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Suggestion {
    pub title: String,
    pub link: String,
}

impl Suggestion {
    pub fn new(title: &str, link: &str) -> Self {
        Self {
            title: title.to_string(),
            link: link.to_string(),
        }
    }
}

/// Ordered suggestions for every BMI category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionCatalog {
    pub underweight: Vec<Suggestion>,
    pub normal: Vec<Suggestion>,
    pub overweight: Vec<Suggestion>,
    pub obese: Vec<Suggestion>,
}

impl SuggestionCatalog {
    /// Suggestions for a category, in catalog order
    pub fn entries(&self, category: BmiCategory) -> &[Suggestion] {
        match category {
            BmiCategory::Underweight => &self.underweight,
            BmiCategory::Normal => &self.normal,
            BmiCategory::Overweight => &self.overweight,
            BmiCategory::Obese => &self.obese,
        }
    }

    /// Total number of suggestions across all categories
    pub fn len(&self) -> usize {
        BmiCategory::ALL.iter().map(|c| self.entries(*c).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check that every category is populated with well-formed entries
    pub fn validate(&self) -> Result<(), CatalogError> {
        for category in BmiCategory::ALL {
            let entries = self.entries(category);
            if entries.is_empty() {
                return Err(CatalogError::EmptyCategory(category));
            }
            for (index, entry) in entries.iter().enumerate() {
                if entry.title.trim().is_empty() {
                    return Err(CatalogError::EmptyTitle { category, index });
                }
                if !(entry.link.starts_with("https://") || entry.link.starts_with("http://")) {
                    return Err(CatalogError::InvalidLink {
                        title: entry.title.clone(),
                        link: entry.link.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl Default for SuggestionCatalog {
    fn default() -> Self {
        Self {
            underweight: vec![
                Suggestion::new("Beginner Strength Training", "https://www.youtube.com/watch?v=U0bhE67HuDY"),
                Suggestion::new("Yoga for Weight Gain", "https://www.youtube.com/watch?v=7kgZnJqzNaU"),
                Suggestion::new("Resistance Bands", "https://www.youtube.com/watch?v=3G4KpZJYySM"),
            ],
            normal: vec![
                Suggestion::new("Running for Fitness", "https://www.youtube.com/watch?v=2O7K-8G2nwU"),
                Suggestion::new("Strength Training", "https://www.youtube.com/watch?v=U0bhE67HuDY"),
                Suggestion::new("Yoga Flexibility", "https://www.youtube.com/watch?v=v7AYKMP6rOE"),
            ],
            overweight: vec![
                Suggestion::new("Low-Impact Cardio", "https://www.youtube.com/watch?v=iNW4lCU693Q"),
                Suggestion::new("Beginner HIIT", "https://www.youtube.com/watch?v=8uVOAhhpEbI"),
                Suggestion::new("Standing Cardio", "https://www.youtube.com/watch?v=WjH-NQDeQ3o"),
            ],
            obese: vec![
                Suggestion::new("Chair Yoga", "https://www.youtube.com/watch?v=1DYH5ud3zHo"),
                Suggestion::new("Chair Stretching", "https://www.youtube.com/watch?v=ct9kgaaJW0c"),
                Suggestion::new("Gentle Seated Workout", "https://www.youtube.com/watch?v=WkYz1g47Hj0"),
            ],
        }
    }
}
