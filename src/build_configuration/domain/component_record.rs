use super::field_value::FieldValue;
use serde::Deserialize;
use serde_json::Value;

/// ComponentRecord - catalog entry as it appears in a catalog document
///
/// This is the wide, loosely typed shape delivered by the content source. Every
/// attribute is optional; `Component::from_record` narrows it into the tagged
/// per-category model used by the engine.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentRecord {
    pub id: Option<FieldValue>,
    pub name: Option<FieldValue>,
    pub price: Option<FieldValue>,
    pub ean: Option<FieldValue>,
    pub images: Option<FieldValue>,
    pub prices_by_option: Option<Value>,
    pub images_by_option: Option<Value>,

    // Variant dimensions
    pub colour: Option<FieldValue>,
    pub color: Option<FieldValue>,
    pub size: Option<FieldValue>,
    pub style: Option<FieldValue>,
    pub storage: Option<FieldValue>,
    /// RAM type, cooler type or storage type depending on the category
    #[serde(rename = "type")]
    pub kind: Option<FieldValue>,

    // Category attributes
    pub socket: Option<FieldValue>,
    pub chipset: Option<FieldValue>,
    pub form_factor: Option<FieldValue>,
    pub ram_support: Option<FieldValue>,
    pub generation: Option<FieldValue>,
    /// Supported form factors on a case, supported CPU generations on a motherboard
    pub compatibility: Option<FieldValue>,
    pub length: Option<FieldValue>,
    pub height: Option<FieldValue>,
    pub max_gpu_length: Option<FieldValue>,
    pub max_cpu_cooler_height: Option<FieldValue>,
    pub max_psu_length: Option<FieldValue>,
    pub tdp: Option<FieldValue>,
    pub tdp_support: Option<FieldValue>,
    pub power: Option<FieldValue>,
    pub wattage: Option<FieldValue>,
}
