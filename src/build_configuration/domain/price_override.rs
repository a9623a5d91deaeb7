use super::field_value::{scalar_to_string, value_to_price};
use serde_json::Value;

/// Price override attached to one option value of a component.
///
/// Catalog entries use either a bare number or a `{ price, ean? }` record.
#[derive(Debug, Clone, PartialEq)]
pub enum PriceOverride {
    Amount(f64),
    Detailed { price: f64, ean: Option<String> },
}

impl PriceOverride {
    /// Parses an override entry, returning None for anything without a usable price
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Object(map) => {
                let price = map.get("price").and_then(value_to_price)?;
                let ean = map
                    .get("ean")
                    .and_then(scalar_to_string)
                    .filter(|e| !e.is_empty());
                Some(PriceOverride::Detailed { price, ean })
            }
            other => value_to_price(other).map(PriceOverride::Amount),
        }
    }

    pub fn price(&self) -> f64 {
        match self {
            PriceOverride::Amount(price) => *price,
            PriceOverride::Detailed { price, .. } => *price,
        }
    }

    pub fn ean(&self) -> Option<&str> {
        match self {
            PriceOverride::Amount(_) => None,
            PriceOverride::Detailed { ean, .. } => ean.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bare_number() {
        let parsed = PriceOverride::from_value(&json!(149.99)).unwrap();
        assert_eq!(parsed, PriceOverride::Amount(149.99));
        assert_eq!(parsed.ean(), None);
    }

    #[test]
    fn test_detailed_record() {
        let parsed =
            PriceOverride::from_value(&json!({"price": 89, "ean": "5060000000017"})).unwrap();
        assert_eq!(parsed.price(), 89.0);
        assert_eq!(parsed.ean(), Some("5060000000017"));
    }

    #[test]
    fn test_detailed_record_with_numeric_ean() {
        let parsed = PriceOverride::from_value(&json!({"price": 89, "ean": 5060000000017u64}))
            .unwrap();
        assert_eq!(parsed.ean(), Some("5060000000017"));
    }

    #[test]
    fn test_record_without_price_is_rejected() {
        assert!(PriceOverride::from_value(&json!({"ean": "123"})).is_none());
        assert!(PriceOverride::from_value(&json!(null)).is_none());
        assert!(PriceOverride::from_value(&json!([1, 2])).is_none());
    }
}
