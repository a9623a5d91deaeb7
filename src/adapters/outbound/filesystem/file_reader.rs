use crate::build_configuration::domain::{Catalog, Category, Component, ComponentRecord};
use crate::ports::outbound::{BuildDocument, BuildReader, CatalogLoadResult, CatalogReader};
use crate::shared::error::ConfiguratorError;
use crate::shared::security::read_checked_file;
use crate::shared::Result;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::Path;
use std::str::FromStr;

/// Document encodings accepted for catalogs and build files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DocumentFormat {
    Json,
    Yaml,
    Toml,
}

impl DocumentFormat {
    fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(DocumentFormat::Json),
            "yml" | "yaml" => Some(DocumentFormat::Yaml),
            "toml" => Some(DocumentFormat::Toml),
            _ => None,
        }
    }

    fn parse<T: DeserializeOwned>(self, content: &str) -> std::result::Result<T, String> {
        match self {
            DocumentFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            DocumentFormat::Yaml => serde_yaml_ng::from_str(content).map_err(|e| e.to_string()),
            DocumentFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        }
    }
}

/// FileSystemReader adapter for reading catalogs and build files
///
/// This adapter implements both CatalogReader and BuildReader ports. Documents
/// may be JSON, YAML or TOML, chosen by file extension.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemReader {
    fn format_of(path: &Path) -> Result<DocumentFormat> {
        DocumentFormat::from_path(path).ok_or_else(|| {
            ConfiguratorError::UnsupportedFileFormat {
                path: path.to_path_buf(),
            }
            .into()
        })
    }

    /// Builds a catalog from a parsed document, skipping what cannot be used
    ///
    /// Unknown category keys, non-array categories and records without an id are
    /// skipped with a warning. Duplicate ids are an error.
    fn build_catalog(document: serde_json::Map<String, Value>) -> Result<CatalogLoadResult> {
        let mut catalog = Catalog::new();
        let mut warnings = Vec::new();

        for (key, entries) in document {
            let category = match Category::from_str(&key) {
                Ok(category) => category,
                Err(_) => {
                    warnings.push(format!("Unknown category '{}' skipped", key));
                    continue;
                }
            };

            let Value::Array(entries) = entries else {
                warnings.push(format!(
                    "Category '{}' is not a list of components; skipped",
                    key
                ));
                continue;
            };

            for (index, entry) in entries.into_iter().enumerate() {
                let record: ComponentRecord = match serde_json::from_value(entry) {
                    Ok(record) => record,
                    Err(e) => {
                        warnings.push(format!("{}[{}] skipped: {}", key, index, e));
                        continue;
                    }
                };

                match Component::from_record(category, record) {
                    Ok(component) => catalog.insert(component)?,
                    Err(e) => warnings.push(format!("{}[{}] skipped: {}", key, index, e)),
                }
            }
        }

        Ok(CatalogLoadResult::new(catalog, warnings))
    }
}

impl CatalogReader for FileSystemReader {
    fn read_catalog(&self, path: &Path) -> Result<CatalogLoadResult> {
        if !path.exists() {
            return Err(ConfiguratorError::CatalogNotFound {
                path: path.to_path_buf(),
                suggestion: "Specify an existing catalog export with the --catalog option."
                    .to_string(),
            }
            .into());
        }

        let format = Self::format_of(path)?;
        let content = read_checked_file(path, "catalog")?;

        let document: serde_json::Map<String, Value> =
            format
                .parse(&content)
                .map_err(|details| ConfiguratorError::CatalogParseError {
                    path: path.to_path_buf(),
                    details,
                })?;

        Self::build_catalog(document)
    }
}

impl BuildReader for FileSystemReader {
    fn read_build(&self, path: &Path) -> Result<BuildDocument> {
        if !path.exists() {
            return Err(ConfiguratorError::FileReadError {
                path: path.to_path_buf(),
                details: "build file does not exist".to_string(),
            }
            .into());
        }

        let format = Self::format_of(path)?;
        let content = read_checked_file(path, "build file")?;

        format.parse(&content).map_err(|details| {
            ConfiguratorError::BuildFileParseError {
                path: path.to_path_buf(),
                details,
            }
            .into()
        })
    }
}
