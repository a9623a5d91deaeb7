use crate::build_configuration::domain::VariantSelection;
use crate::ports::outbound::VariantSelectionStore;
use std::collections::BTreeMap;

/// InMemoryVariantStore adapter holding a session's variant choices
///
/// Entries are created lazily the first time an option is set on a component and
/// are never removed, so a buyer's choice survives switching to another part and
/// back. `version` changes on every write for callers that memoise on it.
#[derive(Debug, Clone, Default)]
pub struct InMemoryVariantStore {
    selections: BTreeMap<String, VariantSelection>,
    version: u64,
}

impl InMemoryVariantStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an option choice for one component
    pub fn set_option(&mut self, component_id: &str, key: &str, value: &str) {
        self.selections
            .entry(component_id.to_string())
            .or_default()
            .set(key, value);
        self.version += 1;
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }
}

impl From<BTreeMap<String, VariantSelection>> for InMemoryVariantStore {
    fn from(selections: BTreeMap<String, VariantSelection>) -> Self {
        Self {
            selections,
            version: 0,
        }
    }
}

impl VariantSelectionStore for InMemoryVariantStore {
    fn get(&self, component_id: &str) -> VariantSelection {
        self.selections
            .get(component_id)
            .cloned()
            .unwrap_or_default()
    }
}
