//! Business logic services
//!
//! Services sit between the HTTP routes and the shared engine.

pub mod assessment;
pub mod catalog;

pub use assessment::AssessmentService;
pub use catalog::CatalogService;
