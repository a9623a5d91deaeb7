use crate::application::read_models::BuildReport;
use crate::shared::Result;

/// ReportFormatter port for rendering a build report
///
/// Implementations exist for Markdown (human review) and JSON (storefront
/// integration).
pub trait ReportFormatter {
    /// Formats the build report
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, report: &BuildReport) -> Result<String>;
}
