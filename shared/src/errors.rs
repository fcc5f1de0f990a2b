//! Error types for the ActiFit engine

use crate::feedback::BmiCategory;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Conditions the engine reports back to the renderer.
///
/// These are never raised as failures: the engine still produces a full
/// report and marks the affected fields as absent.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentError {
    #[error("Please enter a valid exercise duration to calculate calories burned.")]
    MissingDuration,
}

/// Suggestion catalog errors, raised when a catalog is loaded
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Catalog has no suggestions for category '{0}'")]
    EmptyCategory(BmiCategory),

    #[error("Suggestion #{index} in '{category}' has an empty title")]
    EmptyTitle { category: BmiCategory, index: usize },

    #[error("Suggestion '{title}' has an invalid link: {link}")]
    InvalidLink { title: String, link: String },

    #[error("Failed to parse catalog: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_duration_message() {
        assert_eq!(
            AssessmentError::MissingDuration.to_string(),
            "Please enter a valid exercise duration to calculate calories burned."
        );
    }

    #[test]
    fn test_empty_category_message() {
        let err = CatalogError::EmptyCategory(BmiCategory::Obese);
        assert_eq!(err.to_string(), "Catalog has no suggestions for category 'obese'");
    }
}
