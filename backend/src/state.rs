//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction.
//!
//! The suggestion catalog is loaded once at startup and never mutated, so
//! concurrent requests share it without locking. It is validated once, here,
//! and the outcome is kept for the readiness probe.

use crate::config::AppConfig;
use actifit_shared::{FeedbackClassifier, SuggestionCatalog};
use std::sync::Arc;

/// Shared application state
///
/// All fields are `Arc`-backed, so cloning per request is O(1).
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Classifier bound to the loaded suggestion catalog
    pub classifier: FeedbackClassifier,
    /// Validation failure recorded when the state was built
    catalog_error: Option<Arc<str>>,
}

impl AppState {
    /// Create a new application state
    pub fn new(catalog: SuggestionCatalog, config: AppConfig) -> Self {
        let catalog_error = catalog.validate().err().map(|e| Arc::from(e.to_string()));
        Self {
            config: Arc::new(config),
            classifier: FeedbackClassifier::new(Arc::new(catalog)),
            catalog_error,
        }
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get a reference to the feedback classifier
    #[inline]
    pub fn classifier(&self) -> &FeedbackClassifier {
        &self.classifier
    }

    /// Why the catalog failed validation, if it did
    #[inline]
    pub fn catalog_error(&self) -> Option<&str> {
        self.catalog_error.as_deref()
    }

    /// Number of suggestions to return per assessment
    #[inline]
    pub fn suggestion_count(&self) -> usize {
        self.config.suggestions.count
    }
}
