use super::category::{BuildCategory, PeripheralCategory};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Selection - the buyer's current build slot → component id mapping
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Selection {
    slots: BTreeMap<BuildCategory, String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style variant of `select`
    pub fn with(mut self, category: BuildCategory, id: impl Into<String>) -> Self {
        self.select(category, id);
        self
    }

    /// Selects a component for a slot, replacing any previous choice
    pub fn select(&mut self, category: BuildCategory, id: impl Into<String>) {
        self.slots.insert(category, id.into());
    }

    pub fn clear(&mut self, category: BuildCategory) -> Option<String> {
        self.slots.remove(&category)
    }

    pub fn get(&self, category: BuildCategory) -> Option<&str> {
        self.slots.get(&category).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Selected slots in category order
    pub fn iter(&self) -> impl Iterator<Item = (BuildCategory, &str)> {
        self.slots.iter().map(|(c, id)| (*c, id.as_str()))
    }
}

/// PeripheralSelection - accessory group → selected component ids
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct PeripheralSelection {
    groups: BTreeMap<PeripheralCategory, Vec<String>>,
}

impl PeripheralSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, category: PeripheralCategory, id: impl Into<String>) -> Self {
        self.add(category, id);
        self
    }

    pub fn add(&mut self, category: PeripheralCategory, id: impl Into<String>) {
        self.groups.entry(category).or_default().push(id.into());
    }

    /// Removes the first occurrence of `id`, returning whether anything was removed
    pub fn remove(&mut self, category: PeripheralCategory, id: &str) -> bool {
        let Some(ids) = self.groups.get_mut(&category) else {
            return false;
        };
        match ids.iter().position(|existing| existing == id) {
            Some(index) => {
                ids.remove(index);
                if ids.is_empty() {
                    self.groups.remove(&category);
                }
                true
            }
            None => false,
        }
    }

    pub fn ids(&self, category: PeripheralCategory) -> &[String] {
        self.groups
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.values().all(Vec::is_empty)
    }

    pub fn iter(&self) -> impl Iterator<Item = (PeripheralCategory, &[String])> {
        self.groups.iter().map(|(c, ids)| (*c, ids.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_replaces_previous_choice() {
        let mut selection = Selection::new().with(BuildCategory::Cpu, "7600x");
        selection.select(BuildCategory::Cpu, "7800x3d");
        assert_eq!(selection.get(BuildCategory::Cpu), Some("7800x3d"));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_clear_slot() {
        let mut selection = Selection::new()
            .with(BuildCategory::Cpu, "7600x")
            .with(BuildCategory::Gpu, "4070");
        assert_eq!(selection.clear(BuildCategory::Cpu).as_deref(), Some("7600x"));
        assert_eq!(selection.get(BuildCategory::Cpu), None);
        assert!(!selection.is_empty());
    }

    #[test]
    fn test_iter_in_category_order() {
        let selection = Selection::new()
            .with(BuildCategory::Psu, "rm850x")
            .with(BuildCategory::Case, "h5");
        let order: Vec<BuildCategory> = selection.iter().map(|(c, _)| c).collect();
        assert_eq!(order, vec![BuildCategory::Case, BuildCategory::Psu]);
    }

    #[test]
    fn test_deserialize_selection() {
        let selection: Selection =
            serde_json::from_str(r#"{"cpu": "7600x", "caseFans": "p12"}"#).unwrap();
        assert_eq!(selection.get(BuildCategory::CaseFans), Some("p12"));
    }

    #[test]
    fn test_peripherals_allow_multiple_ids() {
        let mut peripherals = PeripheralSelection::new()
            .with(PeripheralCategory::Monitor, "left")
            .with(PeripheralCategory::Monitor, "right");
        assert_eq!(peripherals.ids(PeripheralCategory::Monitor).len(), 2);

        assert!(peripherals.remove(PeripheralCategory::Monitor, "left"));
        assert!(!peripherals.remove(PeripheralCategory::Monitor, "left"));
        assert_eq!(peripherals.ids(PeripheralCategory::Monitor), &["right".to_string()]);
        assert!(peripherals.ids(PeripheralCategory::Cable).is_empty());
    }

    #[test]
    fn test_deserialize_peripherals() {
        let peripherals: PeripheralSelection =
            serde_json::from_str(r#"{"keyboard": ["k70"], "software": []}"#).unwrap();
        assert_eq!(peripherals.ids(PeripheralCategory::Keyboard), &["k70".to_string()]);
        assert!(!peripherals.is_empty());
    }
}
