use crate::build_configuration::domain::Catalog;
use crate::shared::Result;
use std::path::Path;

/// Catalog plus the records that were skipped while loading it
#[derive(Debug, Clone, Default)]
pub struct CatalogLoadResult {
    pub catalog: Catalog,
    /// Human-readable notes about skipped categories and records
    pub warnings: Vec<String>,
}

impl CatalogLoadResult {
    pub fn new(catalog: Catalog, warnings: Vec<String>) -> Self {
        Self { catalog, warnings }
    }
}

/// CatalogReader port for loading the component catalog
///
/// This port abstracts where the catalog comes from (a JSON export, a YAML
/// fixture, a TOML file). The engine never fetches or caches the catalog itself.
pub trait CatalogReader {
    /// Reads and parses the catalog at `path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or fails the security checks
    /// - The document cannot be parsed
    /// - A category contains the same component id twice
    fn read_catalog(&self, path: &Path) -> Result<CatalogLoadResult>;
}
