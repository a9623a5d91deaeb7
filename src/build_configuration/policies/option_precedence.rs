/// OptionPrecedence policy for variant dimensions
///
/// Encodes which component fields can act as buyer-selectable options and the order
/// in which option overrides are consulted when pricing a variant.
///
/// Discovery order (image lookup, listing):
/// `colour, color, size, style, storage, type`
///
/// Price precedence (first hit wins):
/// 1. size
/// 2. storage
/// 3. colour
/// 4. color
/// 5. type
/// 6. style
pub struct OptionPrecedence;

impl OptionPrecedence {
    /// Candidate fields scanned for variant dimensions, in discovery order
    pub const DISCOVERY_ORDER: [&'static str; 6] =
        ["colour", "color", "size", "style", "storage", "type"];

    /// Option keys consulted for price and ean overrides, highest priority first
    pub const PRICE_ORDER: [&'static str; 6] =
        ["size", "storage", "colour", "color", "type", "style"];

    /// Spelling alias of an option key (`colour` ↔ `color`)
    pub fn alias(key: &str) -> Option<&'static str> {
        match key {
            "colour" => Some("color"),
            "color" => Some("colour"),
            _ => None,
        }
    }

    /// Key and its alias, exact key first
    pub fn with_alias(key: &str) -> impl Iterator<Item = &str> {
        std::iter::once(key).chain(Self::alias(key))
    }
}
