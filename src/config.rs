//! Configuration file support for pc-configurator.
//!
//! Provides YAML-based configuration through `pc-configurator.config.yml` files,
//! including data structures, file loading, validation and merging with CLI options.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use pc_configurator::application::dto::OutputFormat;
use pc_configurator::application::read_models::DEFAULT_CURRENCY_SYMBOL;
use pc_configurator::build_configuration::domain::BuildCategory;
use pc_configurator::shared::error::ConfiguratorError;
use pc_configurator::shared::Result;

use crate::cli::Args;

pub const CONFIG_FILENAME: &str = "pc-configurator.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<OutputFormat>,
    pub fail_on_critical: Option<bool>,
    pub placeholder_images: Option<Vec<String>>,
    pub currency_symbol: Option<String>,
    pub eligible: Option<Vec<String>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: BTreeMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Warnings for fields this version does not understand
    pub fn unknown_field_warnings(&self) -> Vec<String> {
        self.unknown_fields
            .keys()
            .map(|key| format!("⚠️  Warning: Unknown config field '{}' will be ignored.", key))
            .collect()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref images) = config.placeholder_images {
        if images.is_empty() {
            bail!(
                "Invalid config: placeholder_images must not be an empty list.\n\n\
                 💡 Hint: Remove the field to use the built-in placeholder, or list at least one image."
            );
        }
        for (i, image) in images.iter().enumerate() {
            if image.trim().is_empty() {
                bail!(
                    "Invalid config: placeholder_images[{}] must not be empty.\n\n\
                     💡 Hint: Each entry must be an image path or URL (e.g., \"/images/placeholder.png\").",
                    i
                );
            }
        }
    }

    if let Some(ref eligible) = config.eligible {
        parse_categories(eligible)?;
    }

    Ok(())
}

fn parse_categories(values: &[String]) -> Result<Vec<BuildCategory>> {
    values
        .iter()
        .map(|value| {
            BuildCategory::from_str(value).map_err(|_| {
                ConfiguratorError::InvalidCategory {
                    value: value.clone(),
                    valid: BuildCategory::ALL
                        .iter()
                        .map(|c| c.key())
                        .collect::<Vec<_>>()
                        .join(", "),
                }
                .into()
            })
        })
        .collect()
}

/// Effective options for one run, after CLI values override config values
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub catalog: PathBuf,
    pub build: PathBuf,
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    pub fail_on_critical: bool,
    pub placeholder_images: Option<Vec<String>>,
    pub currency_symbol: String,
    pub eligible: Vec<BuildCategory>,
}

impl Settings {
    pub fn merge(args: Args, config: Option<ConfigFile>) -> Result<Self> {
        let config = config.unwrap_or_default();

        let eligible = if !args.eligible.is_empty() {
            args.eligible
        } else {
            parse_categories(config.eligible.as_deref().unwrap_or_default())?
        };

        Ok(Self {
            catalog: args.catalog,
            build: args.build,
            output: args.output,
            format: args.format.or(config.format).unwrap_or_default(),
            fail_on_critical: args.fail_on_critical || config.fail_on_critical.unwrap_or(false),
            placeholder_images: config.placeholder_images,
            currency_symbol: config
                .currency_symbol
                .unwrap_or_else(|| DEFAULT_CURRENCY_SYMBOL.to_string()),
            eligible,
        })
    }
}
