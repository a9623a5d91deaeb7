use std::path::Path;
use pc_configurator::prelude::*;

/// Mock CatalogReader serving an in-memory catalog
pub struct MockCatalogReader {
    pub catalog: Catalog,
    pub warnings: Vec<String>,
    pub should_fail: bool,
}

impl MockCatalogReader {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            warnings: Vec::new(),
            should_fail: false,
        }
    }

    pub fn with_warning(mut self, warning: &str) -> Self {
        self.warnings.push(warning.to_string());
        self
    }

    pub fn with_failure() -> Self {
        Self {
            catalog: Catalog::new(),
            warnings: Vec::new(),
            should_fail: true,
        }
    }
}

impl CatalogReader for MockCatalogReader {
    fn read_catalog(&self, _path: &Path) -> Result<CatalogLoadResult> {
        if self.should_fail {
            anyhow::bail!("Mock catalog read failure");
        }
        Ok(CatalogLoadResult::new(
            self.catalog.clone(),
            self.warnings.clone(),
        ))
    }
}
