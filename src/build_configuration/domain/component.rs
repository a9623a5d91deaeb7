use super::category::{BuildCategory, Category, PeripheralCategory};
use super::component_record::ComponentRecord;
use super::field_value::{scalar_to_string, FieldValue};
use super::price_override::PriceOverride;
use crate::shared::Result;
use serde_json::Value;
use std::collections::BTreeMap;

/// Option value → override, keyed again by option key
pub type PriceOverrides = BTreeMap<String, BTreeMap<String, PriceOverride>>;

/// Option value → image references, keyed again by option key
pub type ImageOverrides = BTreeMap<String, BTreeMap<String, Vec<String>>>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaseSpec {
    /// Motherboard form factors the case accepts, as written in the catalog
    pub supported_form_factors: Vec<String>,
    pub max_gpu_length: Option<f64>,
    pub max_cpu_cooler_height: Option<f64>,
    pub max_psu_length: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MotherboardSpec {
    pub socket: Option<String>,
    pub chipset: Option<String>,
    pub form_factor: Option<String>,
    pub ram_support: Vec<String>,
    /// CPU generations the board supports out of the box; `None` when not listed
    pub supported_generations: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CpuSpec {
    pub socket: Option<String>,
    pub generation: Option<String>,
    pub tdp: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RamSpec {
    pub ram_types: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GpuSpec {
    pub length: Option<f64>,
    pub power: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StorageSpec {
    pub storage_types: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PsuSpec {
    pub wattage: Option<f64>,
    pub length: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoolingSpec {
    pub cooler_type: Option<String>,
    pub height: Option<f64>,
    pub tdp_support: Option<f64>,
}

/// Category-specific attributes, tagged by category
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentSpec {
    Case(CaseSpec),
    Motherboard(MotherboardSpec),
    Cpu(CpuSpec),
    Ram(RamSpec),
    Gpu(GpuSpec),
    Storage(StorageSpec),
    Psu(PsuSpec),
    Cooling(CoolingSpec),
    CaseFans,
    Peripheral(PeripheralCategory),
}

impl ComponentSpec {
    pub fn category(&self) -> Category {
        match self {
            ComponentSpec::Case(_) => Category::Build(BuildCategory::Case),
            ComponentSpec::Motherboard(_) => Category::Build(BuildCategory::Motherboard),
            ComponentSpec::Cpu(_) => Category::Build(BuildCategory::Cpu),
            ComponentSpec::Ram(_) => Category::Build(BuildCategory::Ram),
            ComponentSpec::Gpu(_) => Category::Build(BuildCategory::Gpu),
            ComponentSpec::Storage(_) => Category::Build(BuildCategory::Storage),
            ComponentSpec::Psu(_) => Category::Build(BuildCategory::Psu),
            ComponentSpec::Cooling(_) => Category::Build(BuildCategory::Cooling),
            ComponentSpec::CaseFans => Category::Build(BuildCategory::CaseFans),
            ComponentSpec::Peripheral(c) => Category::Peripheral(*c),
        }
    }

    fn from_record(category: Category, record: &ComponentRecord) -> Self {
        let text = |field: &Option<FieldValue>| field.as_ref().and_then(|v| v.as_scalar_string());
        let number = |field: &Option<FieldValue>| field.as_ref().and_then(|v| v.as_number());
        let list = |field: &Option<FieldValue>| {
            field
                .as_ref()
                .map(|v| v.to_string_list())
                .unwrap_or_default()
        };

        match category {
            Category::Build(BuildCategory::Case) => ComponentSpec::Case(CaseSpec {
                supported_form_factors: list(&record.compatibility),
                max_gpu_length: number(&record.max_gpu_length),
                max_cpu_cooler_height: number(&record.max_cpu_cooler_height),
                max_psu_length: number(&record.max_psu_length),
            }),
            Category::Build(BuildCategory::Motherboard) => {
                // Only an explicit list counts as a generation support list
                let supported_generations = match &record.compatibility {
                    Some(v) if v.is_list() => Some(v.to_string_list()),
                    _ => None,
                };
                ComponentSpec::Motherboard(MotherboardSpec {
                    socket: text(&record.socket),
                    chipset: text(&record.chipset),
                    form_factor: text(&record.form_factor),
                    ram_support: list(&record.ram_support),
                    supported_generations,
                })
            }
            Category::Build(BuildCategory::Cpu) => ComponentSpec::Cpu(CpuSpec {
                socket: text(&record.socket),
                generation: text(&record.generation),
                tdp: number(&record.tdp),
            }),
            Category::Build(BuildCategory::Ram) => ComponentSpec::Ram(RamSpec {
                ram_types: list(&record.kind),
            }),
            Category::Build(BuildCategory::Gpu) => ComponentSpec::Gpu(GpuSpec {
                length: number(&record.length),
                power: number(&record.power),
            }),
            Category::Build(BuildCategory::Storage) => ComponentSpec::Storage(StorageSpec {
                storage_types: list(&record.kind),
            }),
            Category::Build(BuildCategory::Psu) => ComponentSpec::Psu(PsuSpec {
                wattage: number(&record.wattage),
                length: number(&record.length),
            }),
            Category::Build(BuildCategory::Cooling) => ComponentSpec::Cooling(CoolingSpec {
                cooler_type: text(&record.kind),
                height: number(&record.height),
                tdp_support: number(&record.tdp_support),
            }),
            Category::Build(BuildCategory::CaseFans) => ComponentSpec::CaseFans,
            Category::Peripheral(c) => ComponentSpec::Peripheral(c),
        }
    }
}

/// Component entity - one catalog entry with its pricing and variant data
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    id: String,
    name: Option<String>,
    price: f64,
    ean: Option<String>,
    images: Vec<String>,
    option_fields: BTreeMap<String, FieldValue>,
    prices_by_option: PriceOverrides,
    images_by_option: ImageOverrides,
    spec: ComponentSpec,
}

impl Component {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64, spec: ComponentSpec) -> Self {
        let name = name.into();
        Self {
            id: id.into(),
            name: if name.is_empty() { None } else { Some(name) },
            price,
            ean: None,
            images: Vec::new(),
            option_fields: BTreeMap::new(),
            prices_by_option: BTreeMap::new(),
            images_by_option: BTreeMap::new(),
            spec,
        }
    }

    /// Narrows a catalog record into the tagged model for `category`.
    ///
    /// Only a missing id is an error; malformed optional attributes are dropped.
    pub fn from_record(category: Category, record: ComponentRecord) -> Result<Self> {
        let id = record
            .id
            .as_ref()
            .and_then(|v| v.as_scalar_string())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| anyhow::anyhow!("{} record has no id", category.key()))?;

        let spec = ComponentSpec::from_record(category, &record);

        let price = match &record.price {
            Some(FieldValue::Number(n)) if n.is_finite() => *n,
            Some(FieldValue::Text(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
            _ => 0.0,
        };

        let mut option_fields = BTreeMap::new();
        let candidates = [
            ("colour", record.colour),
            ("color", record.color),
            ("size", record.size),
            ("style", record.style),
            ("storage", record.storage),
            ("type", record.kind),
        ];
        for (key, value) in candidates {
            if let Some(value) = value {
                option_fields.insert(key.to_string(), value);
            }
        }

        Ok(Self {
            id,
            name: record
                .name
                .and_then(|v| v.as_scalar_string())
                .filter(|n| !n.trim().is_empty()),
            price,
            ean: record
                .ean
                .and_then(|v| v.as_scalar_string())
                .filter(|e| !e.is_empty()),
            images: record.images.map(|v| v.to_string_list()).unwrap_or_default(),
            option_fields,
            prices_by_option: record
                .prices_by_option
                .as_ref()
                .map(parse_price_overrides)
                .unwrap_or_default(),
            images_by_option: record
                .images_by_option
                .as_ref()
                .map(parse_image_overrides)
                .unwrap_or_default(),
            spec,
        })
    }

    pub fn with_ean(mut self, ean: impl Into<String>) -> Self {
        self.ean = Some(ean.into());
        self
    }

    pub fn with_images(mut self, images: Vec<String>) -> Self {
        self.images = images;
        self
    }

    pub fn with_option_field(mut self, key: &str, value: FieldValue) -> Self {
        self.option_fields.insert(key.to_string(), value);
        self
    }

    pub fn with_price_override(mut self, key: &str, value: &str, price: PriceOverride) -> Self {
        self.prices_by_option
            .entry(key.to_string())
            .or_default()
            .insert(value.to_string(), price);
        self
    }

    pub fn with_option_images(mut self, key: &str, value: &str, images: Vec<String>) -> Self {
        self.images_by_option
            .entry(key.to_string())
            .or_default()
            .insert(value.to_string(), images);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Name for messages, falling back to the category label
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_else(|| self.category().label())
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

    pub fn option_field(&self, key: &str) -> Option<&FieldValue> {
        self.option_fields.get(key)
    }

    pub fn prices_by_option(&self) -> &PriceOverrides {
        &self.prices_by_option
    }

    pub fn price_override(&self, key: &str, value: &str) -> Option<&PriceOverride> {
        self.prices_by_option.get(key).and_then(|m| m.get(value))
    }

    pub fn option_images(&self, key: &str, value: &str) -> Option<&[String]> {
        self.images_by_option
            .get(key)
            .and_then(|m| m.get(value))
            .map(Vec::as_slice)
    }

    pub fn spec(&self) -> &ComponentSpec {
        &self.spec
    }

    pub fn category(&self) -> Category {
        self.spec.category()
    }

    pub fn as_case(&self) -> Option<&CaseSpec> {
        match &self.spec {
            ComponentSpec::Case(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_motherboard(&self) -> Option<&MotherboardSpec> {
        match &self.spec {
            ComponentSpec::Motherboard(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_cpu(&self) -> Option<&CpuSpec> {
        match &self.spec {
            ComponentSpec::Cpu(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_ram(&self) -> Option<&RamSpec> {
        match &self.spec {
            ComponentSpec::Ram(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_gpu(&self) -> Option<&GpuSpec> {
        match &self.spec {
            ComponentSpec::Gpu(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_psu(&self) -> Option<&PsuSpec> {
        match &self.spec {
            ComponentSpec::Psu(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_cooling(&self) -> Option<&CoolingSpec> {
        match &self.spec {
            ComponentSpec::Cooling(s) => Some(s),
            _ => None,
        }
    }
}

fn parse_price_overrides(value: &Value) -> PriceOverrides {
    let mut overrides = BTreeMap::new();
    let Value::Object(by_key) = value else {
        return overrides;
    };
    for (key, by_value) in by_key {
        let Value::Object(entries) = by_value else {
            continue;
        };
        let parsed: BTreeMap<String, PriceOverride> = entries
            .iter()
            .filter_map(|(option, raw)| {
                PriceOverride::from_value(raw).map(|price| (option.clone(), price))
            })
            .collect();
        if !parsed.is_empty() {
            overrides.insert(key.clone(), parsed);
        }
    }
    overrides
}

fn parse_image_overrides(value: &Value) -> ImageOverrides {
    let mut overrides = BTreeMap::new();
    let Value::Object(by_key) = value else {
        return overrides;
    };
    for (key, by_value) in by_key {
        let Value::Object(entries) = by_value else {
            continue;
        };
        let parsed: BTreeMap<String, Vec<String>> = entries
            .iter()
            .map(|(option, raw)| {
                let images = match raw {
                    Value::Array(items) => items.iter().filter_map(scalar_to_string).collect(),
                    other => scalar_to_string(other).into_iter().collect(),
                };
                (option.clone(), images)
            })
            .collect();
        overrides.insert(key.clone(), parsed);
    }
    overrides
}
