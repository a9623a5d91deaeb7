use crate::build_configuration::domain::BuildCategory;
use std::path::PathBuf;

/// CheckBuildRequest - Internal request DTO for the build check use case
#[derive(Debug, Clone)]
pub struct CheckBuildRequest {
    /// Catalog document (JSON, YAML or TOML)
    pub catalog_path: PathBuf,
    /// Saved build with selection, peripherals and variant choices
    pub build_path: PathBuf,
    /// Build slots to list eligible candidates for
    pub eligible_categories: Vec<BuildCategory>,
    /// Images used when a component has none; the resolver default when None
    pub placeholder_images: Option<Vec<String>>,
}

impl CheckBuildRequest {
    pub fn new(catalog_path: PathBuf, build_path: PathBuf) -> Self {
        Self {
            catalog_path,
            build_path,
            eligible_categories: Vec::new(),
            placeholder_images: None,
        }
    }

    pub fn with_eligible_categories(mut self, categories: Vec<BuildCategory>) -> Self {
        self.eligible_categories = categories;
        self
    }

    pub fn with_placeholder_images(mut self, images: Vec<String>) -> Self {
        self.placeholder_images = Some(images);
        self
    }
}
