//! Builder for constructing BuildReport from a check-build response

use super::build_report::{
    BuildReport, CandidateView, EligibleView, IssueView, LineItemView, OptionView,
    ReportMetadataView,
};
use crate::application::dto::{CheckBuildResponse, EligibleCandidates, LineItem};
use crate::build_configuration::domain::{CompatibilityIssue, ReportMetadata};

/// Default prefix for rendered prices
pub const DEFAULT_CURRENCY_SYMBOL: &str = "£";

/// Builder for constructing BuildReport from the use case response
pub struct BuildReportBuilder;

impl BuildReportBuilder {
    /// Builds a BuildReport from a check-build response
    ///
    /// # Arguments
    /// * `response` - Result of the build check
    /// * `currency_symbol` - Prefix for rendered prices
    pub fn build(response: &CheckBuildResponse, currency_symbol: &str) -> BuildReport {
        BuildReport {
            metadata: Self::build_metadata(&response.metadata),
            line_items: response.line_items.iter().map(Self::build_line_item).collect(),
            total: response.total,
            currency_symbol: currency_symbol.to_string(),
            critical: Self::build_issues(&response.issues.critical),
            warnings: Self::build_issues(&response.issues.warning),
            eligible: response.eligible.iter().map(Self::build_eligible).collect(),
            dangling_selections: response.dangling_selections.clone(),
        }
    }

    fn build_metadata(metadata: &ReportMetadata) -> ReportMetadataView {
        ReportMetadataView {
            generated_at: metadata.generated_at().to_string(),
            tool_name: metadata.tool_name().to_string(),
            tool_version: metadata.tool_version().to_string(),
            report_id: metadata.report_id().to_string(),
        }
    }

    fn build_line_item(item: &LineItem) -> LineItemView {
        LineItemView {
            category: item.category.key().to_string(),
            category_label: item.category.label().to_string(),
            id: item.component_id.clone(),
            name: item.name.clone(),
            selected_options: item
                .variant
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
            price: item.resolved.price(),
            ean: item.resolved.ean().map(str::to_string),
            images: item.resolved.images().to_vec(),
            options: item
                .options
                .iter()
                .map(|dimension| OptionView {
                    key: dimension.key().to_string(),
                    values: dimension.values().to_vec(),
                })
                .collect(),
            has_multiple_prices: item.has_multiple_prices,
            lowest_price: item.lowest_price,
        }
    }

    fn build_issues(issues: &[CompatibilityIssue]) -> Vec<IssueView> {
        issues
            .iter()
            .map(|issue| IssueView {
                severity: issue.severity().to_string(),
                title: issue.title().to_string(),
                description: issue.description().to_string(),
                recommendation: issue.recommendation().to_string(),
                affected_components: issue.affected_components().to_vec(),
            })
            .collect()
    }

    fn build_eligible(eligible: &EligibleCandidates) -> EligibleView {
        EligibleView {
            category: eligible.category.key().to_string(),
            category_label: eligible.category.label().to_string(),
            candidates: eligible
                .candidates
                .iter()
                .map(|candidate| CandidateView {
                    id: candidate.component_id.clone(),
                    name: candidate.name.clone(),
                    price: candidate.price,
                    has_multiple_prices: candidate.has_multiple_prices,
                    lowest_price: candidate.lowest_price,
                })
                .collect(),
        }
    }
}
