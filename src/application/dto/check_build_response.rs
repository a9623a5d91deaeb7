use crate::build_configuration::domain::{
    BuildCategory, Category, OptionDimension, ReportMetadata, ResolvedVariant, VariantSelection,
};
use crate::build_configuration::services::IssueReport;

/// One selected component, priced and resolved for its variant choice
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub category: Category,
    pub component_id: String,
    pub name: String,
    pub variant: VariantSelection,
    pub resolved: ResolvedVariant,
    pub options: Vec<OptionDimension>,
    pub has_multiple_prices: bool,
    pub lowest_price: f64,
}

/// A candidate that passed the category filter
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub component_id: String,
    pub name: String,
    pub price: f64,
    pub has_multiple_prices: bool,
    pub lowest_price: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EligibleCandidates {
    pub category: BuildCategory,
    pub candidates: Vec<Candidate>,
}

/// CheckBuildResponse - Internal response DTO from the build check use case
#[derive(Debug, Clone)]
pub struct CheckBuildResponse {
    /// Compatibility issues grouped by severity
    pub issues: IssueReport,
    /// Selected build components first (slot order), then peripherals
    pub line_items: Vec<LineItem>,
    pub total: f64,
    pub eligible: Vec<EligibleCandidates>,
    /// Selected ids that do not exist in the catalog, as `category:id`
    pub dangling_selections: Vec<String>,
    pub metadata: ReportMetadata,
}

impl CheckBuildResponse {
    /// Whether the build should fail a `--fail-on-critical` run
    pub fn has_critical_issues(&self) -> bool {
        self.issues.has_critical()
    }
}
