use crate::build_configuration::domain::{
    Component, FieldValue, OptionDimension, PriceOverride, ResolvedVariant, VariantSelection,
};
use crate::build_configuration::policies::OptionPrecedence;

/// Image shown when a component has neither option images nor base images
pub const DEFAULT_PLACEHOLDER_IMAGES: [&str; 1] = ["/images/placeholder-component.png"];

/// VariantResolver service for applying a buyer's option choices to a component
///
/// Option dimensions are discovered from the component's own fields rather than
/// configured per category, so a new kind of variant in the catalog needs no code
/// change as long as it uses one of the candidate field names.
#[derive(Debug, Clone)]
pub struct VariantResolver {
    placeholder_images: Vec<String>,
}

impl Default for VariantResolver {
    fn default() -> Self {
        Self {
            placeholder_images: DEFAULT_PLACEHOLDER_IMAGES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl VariantResolver {
    pub fn new(placeholder_images: Vec<String>) -> Self {
        Self { placeholder_images }
    }

    pub fn placeholder_images(&self) -> &[String] {
        &self.placeholder_images
    }

    /// Finds the option dimensions a buyer can choose from, in discovery order
    ///
    /// A candidate field counts when it is a list with more than one distinct value or
    /// a comma-separated string. `colour` and `color` are one concept; when both are
    /// present only `colour` is reported.
    pub fn detect_options(component: &Component) -> Vec<OptionDimension> {
        let mut dimensions: Vec<OptionDimension> = OptionPrecedence::DISCOVERY_ORDER
            .iter()
            .filter_map(|key| {
                let values = dimension_values(component.option_field(key)?)?;
                Some(OptionDimension::new(*key, values))
            })
            .collect();

        if dimensions.iter().any(|d| d.key() == "colour") {
            dimensions.retain(|d| d.key() != "color");
        }
        dimensions
    }

    /// Effective price, ean and images for a component under a variant selection
    pub fn resolve(&self, component: &Component, variant: &VariantSelection) -> ResolvedVariant {
        let (price, ean) = match Self::matching_override(component, variant) {
            Some(found) => (
                found.price(),
                found.ean().or(component.ean()).map(String::from),
            ),
            None => (component.price(), component.ean().map(String::from)),
        };

        ResolvedVariant::new(price, ean, self.resolve_images(component, variant))
    }

    /// Effective price only; same precedence as [`resolve`](Self::resolve)
    pub fn resolve_price(component: &Component, variant: &VariantSelection) -> f64 {
        Self::matching_override(component, variant)
            .map(PriceOverride::price)
            .unwrap_or_else(|| component.price())
    }

    /// True when the option overrides carry more than one distinct price
    ///
    /// Independent of the current variant selection.
    pub fn has_multiple_prices(component: &Component) -> bool {
        Self::distinct_option_prices(component).len() > 1
    }

    /// Cheapest option override, or the base price when there are none
    pub fn lowest_price(component: &Component) -> f64 {
        Self::distinct_option_prices(component)
            .first()
            .copied()
            .unwrap_or_else(|| component.price())
    }

    /// First override hit in price precedence order, trying the alias spelling
    /// of each key under the same selected value
    fn matching_override<'c>(
        component: &'c Component,
        variant: &VariantSelection,
    ) -> Option<&'c PriceOverride> {
        OptionPrecedence::PRICE_ORDER.iter().find_map(|key| {
            let selected = variant.get(key)?;
            OptionPrecedence::with_alias(key).find_map(|k| component.price_override(k, selected))
        })
    }

    fn resolve_images(&self, component: &Component, variant: &VariantSelection) -> Vec<String> {
        let option_images = Self::detect_options(component)
            .iter()
            .find_map(|dimension| {
                let key = dimension.key();
                let selected = OptionPrecedence::with_alias(key).find_map(|k| variant.get(k))?;
                OptionPrecedence::with_alias(key)
                    .filter_map(|k| component.option_images(k, selected))
                    .find(|images| !images.is_empty())
            })
            .map(<[String]>::to_vec);

        if let Some(images) = option_images {
            return images;
        }
        if !component.images().is_empty() {
            return component.images().to_vec();
        }
        self.placeholder_images.clone()
    }

    /// Sorted, de-duplicated prices across every override entry
    ///
    /// Not limited to detected option fields, so it agrees with the overrides
    /// [`resolve_price`](Self::resolve_price) can hit.
    fn distinct_option_prices(component: &Component) -> Vec<f64> {
        let mut prices: Vec<f64> = component
            .prices_by_option()
            .values()
            .flat_map(|by_value| by_value.values().map(PriceOverride::price))
            .collect();
        prices.sort_by(f64::total_cmp);
        prices.dedup();
        prices
    }
}

/// Values of a candidate field when it qualifies as an option dimension
fn dimension_values(field: &FieldValue) -> Option<Vec<String>> {
    match field {
        FieldValue::List(_) => {
            let values = distinct(field.to_string_list());
            (values.len() > 1).then_some(values)
        }
        FieldValue::Text(text) if text.contains(',') => {
            let values = distinct(
                text.split(',')
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .map(String::from)
                    .collect(),
            );
            (!values.is_empty()).then_some(values)
        }
        _ => None,
    }
}

fn distinct(values: Vec<String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_configuration::domain::{ComponentSpec, MotherboardSpec, PeripheralCategory};

    fn monitor(price: f64) -> Component {
        Component::new(
            "odyssey",
            "Odyssey G5",
            price,
            ComponentSpec::Peripheral(PeripheralCategory::Monitor),
        )
        .with_ean("5000000000001")
    }

    #[test]
    fn test_detect_options_list_and_comma_string() {
        let component = monitor(250.0)
            .with_option_field("colour", FieldValue::list(&["Black", "White", "Black"]))
            .with_option_field("size", FieldValue::text("27\", 32\""))
            .with_option_field("style", FieldValue::list(&["Curved"]))
            .with_option_field("storage", FieldValue::text("1TB"));

        let dimensions = VariantResolver::detect_options(&component);

        assert_eq!(dimensions.len(), 2);
        assert_eq!(dimensions[0].key(), "colour");
        assert_eq!(dimensions[0].values(), &["Black".to_string(), "White".to_string()]);
        assert_eq!(dimensions[1].key(), "size");
        assert_eq!(dimensions[1].values(), &["27\"".to_string(), "32\"".to_string()]);
    }

    #[test]
    fn test_detect_options_prefers_colour_over_color() {
        let both = monitor(250.0)
            .with_option_field("color", FieldValue::list(&["Red", "Blue"]))
            .with_option_field("colour", FieldValue::list(&["Red", "Blue"]));
        let keys: Vec<String> = VariantResolver::detect_options(&both)
            .iter()
            .map(|d| d.key().to_string())
            .collect();
        assert_eq!(keys, vec!["colour"]);

        let american = monitor(250.0).with_option_field("color", FieldValue::text("Red, Blue"));
        assert_eq!(VariantResolver::detect_options(&american)[0].key(), "color");
    }

    #[test]
    fn test_single_value_list_is_not_a_dimension() {
        let component = monitor(250.0).with_option_field("size", FieldValue::list(&["27\"", "27\""]));
        assert!(VariantResolver::detect_options(&component).is_empty());
    }

    #[test]
    fn test_resolve_falls_back_to_base() {
        let resolver = VariantResolver::default();
        let component = monitor(250.0).with_images(vec!["front.png".into()]);

        let resolved = resolver.resolve(&component, &VariantSelection::new());

        assert_eq!(resolved.price(), 250.0);
        assert_eq!(resolved.ean(), Some("5000000000001"));
        assert_eq!(resolved.images(), &["front.png".to_string()]);
    }

    #[test]
    fn test_resolve_uses_placeholder_without_images() {
        let resolver = VariantResolver::new(vec!["blank.png".into()]);
        let resolved = resolver.resolve(&monitor(250.0), &VariantSelection::new());
        assert_eq!(resolved.images(), &["blank.png".to_string()]);
    }

    #[test]
    fn test_variant_precedence_size_over_colour() {
        // Declared colour first on purpose; precedence must not depend on source order
        let component = monitor(250.0)
            .with_price_override("colour", "White", PriceOverride::Amount(260.0))
            .with_price_override("size", "32\"", PriceOverride::Amount(330.0));

        let colour_only = VariantSelection::new().with("colour", "White");
        assert_eq!(VariantResolver::resolve_price(&component, &colour_only), 260.0);

        let both = VariantSelection::new()
            .with("colour", "White")
            .with("size", "32\"");
        assert_eq!(VariantResolver::resolve_price(&component, &both), 330.0);
    }

    #[test]
    fn test_unmatched_selection_falls_through_to_next_key() {
        let component = monitor(250.0)
            .with_price_override("colour", "White", PriceOverride::Amount(260.0))
            .with_price_override("size", "32\"", PriceOverride::Amount(330.0));
        let variant = VariantSelection::new()
            .with("size", "24\"")
            .with("colour", "White");
        assert_eq!(VariantResolver::resolve_price(&component, &variant), 260.0);
    }

    #[test]
    fn test_alias_equivalence() {
        let resolver = VariantResolver::default();
        let component = monitor(250.0).with_price_override(
            "color",
            "Red",
            PriceOverride::Detailed {
                price: 270.0,
                ean: Some("5000000000099".into()),
            },
        );

        let british = resolver.resolve(&component, &VariantSelection::new().with("colour", "Red"));
        let american = resolver.resolve(&component, &VariantSelection::new().with("color", "Red"));

        assert_eq!(british, american);
        assert_eq!(british.price(), 270.0);
        assert_eq!(british.ean(), Some("5000000000099"));
    }

    #[test]
    fn test_override_without_ean_keeps_base_ean() {
        let resolver = VariantResolver::default();
        let component = monitor(250.0).with_price_override(
            "size",
            "32\"",
            PriceOverride::Detailed { price: 300.0, ean: None },
        );
        let resolved = resolver.resolve(&component, &VariantSelection::new().with("size", "32\""));
        assert_eq!(resolved.price(), 300.0);
        assert_eq!(resolved.ean(), Some("5000000000001"));
    }

    #[test]
    fn test_images_follow_discovery_order() {
        let resolver = VariantResolver::default();
        let component = monitor(250.0)
            .with_images(vec!["base.png".into()])
            .with_option_field("colour", FieldValue::list(&["Black", "White"]))
            .with_option_field("size", FieldValue::list(&["27\"", "32\""]))
            .with_option_images("size", "32\"", vec!["big.png".into()])
            .with_option_images("colour", "White", vec!["white.png".into()])
            .with_option_images("colour", "Black", vec![]);

        let both = VariantSelection::new()
            .with("size", "32\"")
            .with("colour", "White");
        assert_eq!(resolver.resolve(&component, &both).images(), &["white.png".to_string()]);

        // An empty image list does not count as a hit
        let black = VariantSelection::new()
            .with("size", "32\"")
            .with("colour", "Black");
        assert_eq!(resolver.resolve(&component, &black).images(), &["big.png".to_string()]);

        let untouched = VariantSelection::new();
        assert_eq!(resolver.resolve(&component, &untouched).images(), &["base.png".to_string()]);
    }

    #[test]
    fn test_images_only_for_detected_options() {
        let resolver = VariantResolver::default();
        let component = monitor(250.0)
            .with_images(vec!["base.png".into()])
            .with_option_images("style", "Curved", vec!["curved.png".into()]);
        let variant = VariantSelection::new().with("style", "Curved");
        assert_eq!(resolver.resolve(&component, &variant).images(), &["base.png".to_string()]);
    }

    #[test]
    fn test_multiple_price_detection() {
        let component = monitor(120.0)
            .with_option_field("colour", FieldValue::list(&["Red", "Blue", "Black"]))
            .with_price_override("colour", "Red", PriceOverride::Amount(100.0))
            .with_price_override("colour", "Blue", PriceOverride::Amount(100.0))
            .with_price_override("colour", "Black", PriceOverride::Amount(120.0));

        assert!(VariantResolver::has_multiple_prices(&component));
        assert_eq!(VariantResolver::lowest_price(&component), 100.0);
    }

    #[test]
    fn test_multiple_prices_without_option_field() {
        let component = monitor(120.0)
            .with_price_override("colour", "Red", PriceOverride::Amount(100.0))
            .with_price_override("colour", "Blue", PriceOverride::Amount(100.0))
            .with_price_override("colour", "Black", PriceOverride::Amount(120.0));

        assert!(VariantResolver::detect_options(&component).is_empty());
        assert!(VariantResolver::has_multiple_prices(&component));
        assert_eq!(VariantResolver::lowest_price(&component), 100.0);

        // The cheapest advertised price is one a selection can actually reach
        let red = VariantSelection::new().with("colour", "Red");
        assert_eq!(
            VariantResolver::resolve_price(&component, &red),
            VariantResolver::lowest_price(&component)
        );
    }

    #[test]
    fn test_multiple_prices_with_single_value_field() {
        let component = monitor(120.0)
            .with_option_field("colour", FieldValue::text("Red"))
            .with_price_override("colour", "Red", PriceOverride::Amount(100.0))
            .with_price_override("size", "32\"", PriceOverride::Amount(150.0));

        assert!(VariantResolver::has_multiple_prices(&component));
        assert_eq!(VariantResolver::lowest_price(&component), 100.0);
    }

    #[test]
    fn test_uniform_overrides_are_not_multiple_prices() {
        let component = monitor(120.0)
            .with_option_field("colour", FieldValue::list(&["Red", "Blue"]))
            .with_price_override("colour", "Red", PriceOverride::Amount(120.0))
            .with_price_override("colour", "Blue", PriceOverride::Amount(120.0));

        assert!(!VariantResolver::has_multiple_prices(&component));
        assert_eq!(VariantResolver::lowest_price(&component), 120.0);
    }

    #[test]
    fn test_lowest_price_scans_alias_and_ignores_selection() {
        let component = monitor(150.0)
            .with_option_field("colour", FieldValue::list(&["Red", "Blue"]))
            .with_price_override("color", "Red", PriceOverride::Amount(140.0))
            .with_price_override("color", "Blue", PriceOverride::Amount(155.0));

        assert!(VariantResolver::has_multiple_prices(&component));
        assert_eq!(VariantResolver::lowest_price(&component), 140.0);
    }

    #[test]
    fn test_lowest_price_without_overrides_is_base() {
        let component = Component::new(
            "b650",
            "B650 Tomahawk",
            189.99,
            ComponentSpec::Motherboard(MotherboardSpec::default()),
        );
        assert!(!VariantResolver::has_multiple_prices(&component));
        assert_eq!(VariantResolver::lowest_price(&component), 189.99);
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let resolver = VariantResolver::default();
        let component = monitor(250.0)
            .with_option_field("colour", FieldValue::list(&["Black", "White"]))
            .with_price_override("colour", "White", PriceOverride::Amount(260.0))
            .with_option_images("colour", "White", vec!["white.png".into()]);
        let variant = VariantSelection::new().with("colour", "White");

        assert_eq!(
            resolver.resolve(&component, &variant),
            resolver.resolve(&component, &variant)
        );
    }
}
