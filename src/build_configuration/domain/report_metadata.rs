/// ReportMetadata value object identifying one build check report
#[derive(Debug, Clone)]
pub struct ReportMetadata {
    generated_at: String,
    tool_name: String,
    tool_version: String,
    report_id: String,
}

impl ReportMetadata {
    pub fn new(
        generated_at: String,
        tool_name: String,
        tool_version: String,
        report_id: String,
    ) -> Self {
        Self {
            generated_at,
            tool_name,
            tool_version,
            report_id,
        }
    }

    pub fn generated_at(&self) -> &str {
        &self.generated_at
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    pub fn report_id(&self) -> &str {
        &self.report_id
    }
}
