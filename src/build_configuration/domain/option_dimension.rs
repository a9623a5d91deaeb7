/// OptionDimension value object - one buyer-selectable attribute of a component
/// (e.g. `colour` with values `Black, White`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDimension {
    key: String,
    values: Vec<String>,
}

impl OptionDimension {
    pub fn new(key: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            key: key.into(),
            values,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Values in catalog order, without duplicates
    pub fn values(&self) -> &[String] {
        &self.values
    }
}
