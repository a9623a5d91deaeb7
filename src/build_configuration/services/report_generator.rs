use crate::build_configuration::domain::ReportMetadata;
use chrono::Utc;
use uuid::Uuid;

/// ReportGenerator service for stamping build check reports
pub struct ReportGenerator;

impl ReportGenerator {
    /// Metadata with the current RFC3339 timestamp and a fresh `urn:uuid:` report id
    pub fn generate_metadata(tool_name: &str, tool_version: &str) -> ReportMetadata {
        let generated_at = Utc::now().to_rfc3339();
        let report_id = format!("urn:uuid:{}", Uuid::new_v4());

        ReportMetadata::new(
            generated_at,
            tool_name.to_string(),
            tool_version.to_string(),
            report_id,
        )
    }

    /// Uses this crate's name and compile-time version
    pub fn generate_default_metadata() -> ReportMetadata {
        Self::generate_metadata(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }
}
