use super::variant_resolver::VariantResolver;
use crate::build_configuration::domain::{
    Catalog, PeripheralSelection, Selection, VariantSelectionStore,
};

/// BuildTotalCalculator service for pricing a whole build
pub struct BuildTotalCalculator;

impl BuildTotalCalculator {
    /// Sums the variant-aware price of every selected build component and the base
    /// price of every selected peripheral
    ///
    /// Ids that do not resolve in the catalog contribute nothing.
    pub fn total<S: VariantSelectionStore + ?Sized>(
        selection: &Selection,
        peripherals: &PeripheralSelection,
        catalog: &Catalog,
        variant_store: &S,
    ) -> f64 {
        let components: f64 = selection
            .iter()
            .filter_map(|(category, id)| catalog.find(category, id))
            .map(|component| {
                let variant = variant_store.get(component.id());
                VariantResolver::resolve_price(component, &variant)
            })
            .sum();

        // Peripherals have no variant dimensions
        let accessories: f64 = peripherals
            .iter()
            .flat_map(|(category, ids)| {
                ids.iter()
                    .filter_map(move |id| catalog.find_peripheral(category, id))
            })
            .map(|component| component.price())
            .sum();

        components + accessories
    }
}
