//! Build report read model
//!
//! Flattened, serialisable view of a checked build. Formatters render this
//! struct and never reach back into the domain.

use serde::Serialize;
use std::collections::BTreeMap;

/// Main read model for a checked build
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildReport {
    pub metadata: ReportMetadataView,
    pub line_items: Vec<LineItemView>,
    pub total: f64,
    /// Prefix used when rendering prices, e.g. "£"
    pub currency_symbol: String,
    pub critical: Vec<IssueView>,
    pub warnings: Vec<IssueView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub eligible: Vec<EligibleView>,
    /// Selected ids missing from the catalog, as `category:id`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dangling_selections: Vec<String>,
}

impl BuildReport {
    pub fn is_compatible(&self) -> bool {
        self.critical.is_empty()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadataView {
    pub generated_at: String,
    pub tool_name: String,
    pub tool_version: String,
    pub report_id: String,
}

/// One priced row of the build
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemView {
    pub category: String,
    pub category_label: String,
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub selected_options: BTreeMap<String, String>,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ean: Option<String>,
    pub images: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionView>,
    pub has_multiple_prices: bool,
    pub lowest_price: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct OptionView {
    pub key: String,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueView {
    pub severity: String,
    pub title: String,
    pub description: String,
    pub recommendation: String,
    pub affected_components: Vec<String>,
}

/// Candidates for one build slot
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibleView {
    pub category: String,
    pub category_label: String,
    pub candidates: Vec<CandidateView>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateView {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub has_multiple_prices: bool,
    pub lowest_price: f64,
}
