use serde::Deserialize;
use std::collections::BTreeMap;

/// VariantSelection - option key → chosen value for one component
///
/// Stored per component id, independently of which component is currently selected,
/// so a buyer's colour choice survives switching to another part and back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct VariantSelection {
    options: BTreeMap<String, String>,
}

impl VariantSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.options.insert(key.to_string(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.options.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Per-component variant choices, read by id
///
/// Implementations return an empty selection for ids the buyer never customised.
pub trait VariantSelectionStore {
    fn get(&self, component_id: &str) -> VariantSelection;
}

impl VariantSelectionStore for BTreeMap<String, VariantSelection> {
    fn get(&self, component_id: &str) -> VariantSelection {
        BTreeMap::get(self, component_id).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut variant = VariantSelection::new();
        assert!(variant.is_empty());
        variant.set("colour", "White");
        variant.set("colour", "Black");
        assert_eq!(variant.get("colour"), Some("Black"));
        assert_eq!(variant.get("size"), None);
    }

    #[test]
    fn test_deserialize() {
        let variant: VariantSelection =
            serde_json::from_str(r#"{"size": "27\"", "colour": "Red"}"#).unwrap();
        assert_eq!(variant.get("size"), Some("27\""));
        assert_eq!(variant.iter().count(), 2);
    }

    #[test]
    fn test_map_store_returns_empty_for_unknown_id() {
        let mut store: BTreeMap<String, VariantSelection> = BTreeMap::new();
        store.insert("h5".into(), VariantSelection::new().with("colour", "White"));

        assert_eq!(VariantSelectionStore::get(&store, "h5").get("colour"), Some("White"));
        assert!(VariantSelectionStore::get(&store, "other").is_empty());
    }
}
