use crate::build_configuration::domain::{CompatibilityIssue, Severity};

/// Issues partitioned for the two UI treatments: critical issues gate checkout,
/// warnings are informational
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IssueReport {
    pub critical: Vec<CompatibilityIssue>,
    pub warning: Vec<CompatibilityIssue>,
}

impl IssueReport {
    pub fn has_critical(&self) -> bool {
        !self.critical.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.critical.is_empty() && self.warning.is_empty()
    }

    pub fn len(&self) -> usize {
        self.critical.len() + self.warning.len()
    }
}

/// IssueReporter service for grouping evaluator output by severity
pub struct IssueReporter;

impl IssueReporter {
    /// Partitions issues by severity, keeping evaluator order inside each group
    pub fn report(issues: Vec<CompatibilityIssue>) -> IssueReport {
        let (critical, warning) = issues
            .into_iter()
            .partition(|issue| issue.severity() == Severity::Critical);
        IssueReport { critical, warning }
    }
}
