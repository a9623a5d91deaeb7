use crate::build_configuration::domain::{PeripheralSelection, Selection, VariantSelection};
use crate::shared::Result;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// BuildDocument - a saved build: slot selection, accessories and the buyer's
/// per-component variant choices
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildDocument {
    pub selection: Selection,
    pub peripherals: PeripheralSelection,
    /// Component id → option key → chosen value
    pub variants: BTreeMap<String, VariantSelection>,
}

/// BuildReader port for loading a saved build
pub trait BuildReader {
    /// Reads and parses the build file at `path`
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or contains unknown categories
    fn read_build(&self, path: &Path) -> Result<BuildDocument>;
}
