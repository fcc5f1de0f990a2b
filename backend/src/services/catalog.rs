//! Suggestion catalog loading
//!
//! The built-in catalog is used unless a TOML file is configured. A file
//! that fails to parse or validate aborts startup.

use actifit_shared::{CatalogError, SuggestionCatalog};
use anyhow::{Context, Result};
use tracing::info;

/// Catalog loading service
pub struct CatalogService;

impl CatalogService {
    /// Load the catalog from `path`, or fall back to the built-in one
    pub async fn load(path: Option<&str>) -> Result<SuggestionCatalog> {
        let catalog = match path {
            Some(path) => {
                let raw = tokio::fs::read_to_string(path)
                    .await
                    .with_context(|| format!("Failed to read suggestion catalog at {}", path))?;
                let catalog = Self::parse(&raw)
                    .with_context(|| format!("Invalid suggestion catalog at {}", path))?;
                info!(path, entries = catalog.len(), "Loaded suggestion catalog");
                catalog
            }
            None => {
                let catalog = SuggestionCatalog::default();
                info!(entries = catalog.len(), "Using built-in suggestion catalog");
                catalog
            }
        };
        Ok(catalog)
    }

    /// Parse and validate a TOML catalog
    pub fn parse(raw: &str) -> Result<SuggestionCatalog, CatalogError> {
        let catalog: SuggestionCatalog =
            toml::from_str(raw).map_err(|e| CatalogError::Parse(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }
}
