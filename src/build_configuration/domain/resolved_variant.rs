/// ResolvedVariant value object - effective price, identifier and images of a
/// component once the buyer's variant choice is applied
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedVariant {
    price: f64,
    ean: Option<String>,
    images: Vec<String>,
}

impl ResolvedVariant {
    pub fn new(price: f64, ean: Option<String>, images: Vec<String>) -> Self {
        Self { price, ean, images }
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn ean(&self) -> Option<&str> {
        self.ean.as_deref()
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }
}
