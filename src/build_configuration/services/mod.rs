mod build_total;
mod category_filter;
mod compatibility_evaluator;
mod issue_reporter;
mod report_generator;
mod rule_primitives;
mod variant_resolver;

pub use build_total::BuildTotalCalculator;
pub use category_filter::CategoryFilter;
pub use compatibility_evaluator::CompatibilityEvaluator;
pub use issue_reporter::{IssueReport, IssueReporter};
pub use report_generator::ReportGenerator;
pub use variant_resolver::{VariantResolver, DEFAULT_PLACEHOLDER_IMAGES};
