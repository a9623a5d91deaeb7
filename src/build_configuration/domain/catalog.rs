use super::category::{BuildCategory, Category, PeripheralCategory};
use super::component::Component;
use crate::shared::error::ConfiguratorError;
use crate::shared::Result;
use std::collections::HashMap;

/// Resolves a selected id to its component.
///
/// The compatibility evaluator only sees the catalog through this trait, so callers
/// can back it with whatever storage they hold.
pub trait ComponentLookup {
    fn lookup(&self, category: BuildCategory, id: &str) -> Option<&Component>;
}

/// Catalog aggregate - components grouped by category, in catalog order
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    build: HashMap<BuildCategory, Vec<Component>>,
    peripherals: HashMap<PeripheralCategory, Vec<Component>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a component under the category its payload is tagged with
    ///
    /// # Errors
    /// Returns `DuplicateComponentId` if the id already exists in that category
    pub fn insert(&mut self, component: Component) -> Result<()> {
        let category = component.category();
        let slice = match category {
            Category::Build(c) => self.build.entry(c).or_default(),
            Category::Peripheral(c) => self.peripherals.entry(c).or_default(),
        };

        if slice.iter().any(|existing| existing.id() == component.id()) {
            return Err(ConfiguratorError::DuplicateComponentId {
                category: category.key().to_string(),
                id: component.id().to_string(),
            }
            .into());
        }

        slice.push(component);
        Ok(())
    }

    /// Builder-style insert for assembling catalogs in code
    pub fn with(mut self, component: Component) -> Result<Self> {
        self.insert(component)?;
        Ok(self)
    }

    /// Full catalog slice for a build slot (empty if the category has no entries)
    pub fn components(&self, category: BuildCategory) -> &[Component] {
        self.build
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn peripherals(&self, category: PeripheralCategory) -> &[Component] {
        self.peripherals
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn find(&self, category: BuildCategory, id: &str) -> Option<&Component> {
        self.components(category).iter().find(|c| c.id() == id)
    }

    pub fn find_peripheral(&self, category: PeripheralCategory, id: &str) -> Option<&Component> {
        self.peripherals(category).iter().find(|c| c.id() == id)
    }

    /// Total number of components across all categories
    pub fn len(&self) -> usize {
        self.build.values().map(Vec::len).sum::<usize>()
            + self.peripherals.values().map(Vec::len).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ComponentLookup for Catalog {
    fn lookup(&self, category: BuildCategory, id: &str) -> Option<&Component> {
        self.find(category, id)
    }
}
