use serde::Serialize;
use std::fmt;

/// Severity of a compatibility issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Physically or electrically incompatible
    Critical,
    /// Works with caveats or is sub-optimal
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// CompatibilityIssue value object describing one problem in a build
#[derive(Debug, Clone, PartialEq)]
pub struct CompatibilityIssue {
    severity: Severity,
    title: String,
    description: String,
    recommendation: String,
    affected_components: Vec<String>,
}

impl CompatibilityIssue {
    pub fn new(
        severity: Severity,
        title: impl Into<String>,
        description: impl Into<String>,
        recommendation: impl Into<String>,
        affected_components: Vec<String>,
    ) -> Self {
        Self {
            severity,
            title: title.into(),
            description: description.into(),
            recommendation: recommendation.into(),
            affected_components,
        }
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn recommendation(&self) -> &str {
        &self.recommendation
    }

    pub fn affected_components(&self) -> &[String] {
        &self.affected_components
    }

    pub fn is_critical(&self) -> bool {
        self.severity == Severity::Critical
    }
}
