use crate::application::read_models::BuildReport;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// JsonFormatter adapter for machine-readable build reports
///
/// Serializes the read model as-is, camelCase keys, for storefront integration.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &BuildReport) -> Result<String> {
        serde_json::to_string_pretty(report).map_err(Into::into)
    }
}
