//! ActiFit Shared Library
//!
//! The calculation and classification engine behind the ActiFit planner,
//! plus the request/response types shared by the backend and WASM modules.

pub mod assessment;
pub mod catalog;
pub mod errors;
pub mod exercise;
pub mod feedback;
pub mod health_metrics;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use assessment::{assess, AssessmentReport};
pub use catalog::{Suggestion, SuggestionCatalog};
pub use errors::*;
pub use exercise::{met_value, ExerciseType, DEFAULT_MET};
pub use feedback::*;
pub use health_metrics::*;
pub use types::*;
