pub mod catalog;
pub mod category;
pub mod compatibility_issue;
pub mod component;
pub mod component_record;
pub mod field_value;
pub mod option_dimension;
pub mod price_override;
pub mod resolved_variant;
pub mod report_metadata;
pub mod selection;
pub mod variant_selection;

pub use catalog::{Catalog, ComponentLookup};
pub use category::{BuildCategory, Category, PeripheralCategory};
pub use compatibility_issue::{CompatibilityIssue, Severity};
pub use component::{
    CaseSpec, Component, ComponentSpec, CoolingSpec, CpuSpec, GpuSpec, MotherboardSpec, PsuSpec,
    RamSpec, StorageSpec,
};
pub use component_record::ComponentRecord;
pub use field_value::FieldValue;
pub use option_dimension::OptionDimension;
pub use price_override::PriceOverride;
pub use report_metadata::ReportMetadata;
pub use resolved_variant::ResolvedVariant;
pub use selection::{PeripheralSelection, Selection};
pub use variant_selection::{VariantSelection, VariantSelectionStore};
