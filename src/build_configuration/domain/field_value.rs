use serde::Deserialize;
use serde_json::Value;

/// A loosely typed catalog attribute.
///
/// Catalog content comes from a CMS where the same attribute can be a string in one
/// record, a list in another and a number in a third. Values of an unexpected shape
/// land in `Other` so a single odd record never fails a catalog load.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
    List(Vec<Value>),
    Other(Value),
}

impl FieldValue {
    pub fn text(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }

    pub fn list(values: &[&str]) -> Self {
        FieldValue::List(values.iter().map(|v| Value::from(*v)).collect())
    }

    /// Numeric value. Strings are not coerced.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) if n.is_finite() => Some(*n),
            _ => None,
        }
    }

    /// Single scalar rendered as a string (numbers included)
    pub fn as_scalar_string(&self) -> Option<String> {
        match self {
            FieldValue::Text(s) => Some(s.clone()),
            FieldValue::Number(n) if n.is_finite() => Some(n.to_string()),
            _ => None,
        }
    }

    /// Normalizes a scalar or list into a list of strings.
    ///
    /// A scalar becomes a one-element list; list items that are neither strings nor
    /// numbers are dropped.
    pub fn to_string_list(&self) -> Vec<String> {
        match self {
            FieldValue::List(items) => items.iter().filter_map(scalar_to_string).collect(),
            other => other.as_scalar_string().into_iter().collect(),
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, FieldValue::List(_))
    }
}

/// Renders a JSON scalar as a string, ignoring nested structures
pub(crate) fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Reads a JSON number, accepting numeric strings such as `"129.99"`
pub(crate) fn value_to_price(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|p| p.is_finite())
}
