use crate::application::read_models::{
    BuildReport, EligibleView, IssueView, LineItemView,
};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Markdown table header for the build line items
const TABLE_HEADER: &str = "| Category | Component | Options | EAN | Price |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str = "|----------|-----------|---------|-----|-------|\n";

/// Markdown table header for eligible candidates
const CANDIDATE_TABLE_HEADER: &str = "| Component | ID | Price |\n";

/// Markdown table separator line for eligible candidates
const CANDIDATE_TABLE_SEPARATOR: &str = "|-----------|----|-------|\n";

/// MarkdownFormatter adapter for human-readable build reports
///
/// Renders compatibility issues first, then the priced line items and the total,
/// then any requested eligibility lists.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn money(symbol: &str, amount: f64) -> String {
        format!("{}{:.2}", symbol, amount)
    }

    /// "From £X" when a part's options are priced differently, the plain price otherwise
    fn display_price(symbol: &str, price: f64, has_multiple_prices: bool, lowest: f64) -> String {
        if has_multiple_prices {
            format!("From {}", Self::money(symbol, lowest))
        } else {
            Self::money(symbol, price)
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, report: &BuildReport) {
        output.push_str("# PC Build Report\n\n");
        output.push_str(&format!(
            "Generated by {} {} at {}\n\n",
            report.metadata.tool_name, report.metadata.tool_version, report.metadata.generated_at
        ));
        output.push_str(&format!("Report ID: `{}`\n\n", report.metadata.report_id));
    }

    fn render_compatibility(&self, output: &mut String, report: &BuildReport) {
        output.push_str("## Compatibility\n\n");

        if report.critical.is_empty() && report.warnings.is_empty() {
            output.push_str("✅ No compatibility issues found.\n\n");
            return;
        }

        if !report.critical.is_empty() {
            output.push_str(&format!(
                "### ❌ Critical Issues ({})\n\n",
                report.critical.len()
            ));
            self.render_issues(output, &report.critical);
        }

        if !report.warnings.is_empty() {
            output.push_str(&format!("### ⚠️ Warnings ({})\n\n", report.warnings.len()));
            self.render_issues(output, &report.warnings);
        }
    }

    fn render_issues(&self, output: &mut String, issues: &[IssueView]) {
        for issue in issues {
            output.push_str(&format!("- **{}**: {}\n", issue.title, issue.description));
            output.push_str(&format!("  - Recommendation: {}\n", issue.recommendation));
            if !issue.affected_components.is_empty() {
                output.push_str(&format!(
                    "  - Affects: {}\n",
                    issue.affected_components.join(", ")
                ));
            }
        }
        output.push('\n');
    }

    fn render_line_items(&self, output: &mut String, report: &BuildReport) {
        output.push_str("## Components\n\n");

        if report.line_items.is_empty() {
            output.push_str("*No components selected*\n\n");
        } else {
            output.push_str(TABLE_HEADER);
            output.push_str(TABLE_SEPARATOR);
            for item in &report.line_items {
                output.push_str(&self.render_line_item(item, &report.currency_symbol));
            }
            output.push('\n');
        }

        output.push_str(&format!(
            "**Total: {}**\n\n",
            Self::money(&report.currency_symbol, report.total)
        ));
    }

    fn render_line_item(&self, item: &LineItemView, symbol: &str) -> String {
        let options = item
            .selected_options
            .iter()
            .map(|(key, value)| format!("{}: {}", key, value))
            .collect::<Vec<_>>()
            .join(", ");

        // No choice made yet: the shown price is only one of several
        let price = if item.has_multiple_prices && item.selected_options.is_empty() {
            Self::display_price(symbol, item.price, true, item.lowest_price)
        } else {
            Self::money(symbol, item.price)
        };

        format!(
            "| {} | {} | {} | {} | {} |\n",
            Self::escape_markdown_table_cell(&item.category_label),
            Self::escape_markdown_table_cell(&item.name),
            Self::escape_markdown_table_cell(&options),
            Self::escape_markdown_table_cell(item.ean.as_deref().unwrap_or("")),
            price
        )
    }

    fn render_eligible(&self, output: &mut String, eligible: &[EligibleView], symbol: &str) {
        output.push_str("## Eligible Parts\n\n");

        for slot in eligible {
            output.push_str(&format!("### {}\n\n", slot.category_label));
            if slot.candidates.is_empty() {
                output.push_str("*No compatible parts in the catalog*\n\n");
                continue;
            }

            output.push_str(CANDIDATE_TABLE_HEADER);
            output.push_str(CANDIDATE_TABLE_SEPARATOR);
            for candidate in &slot.candidates {
                output.push_str(&format!(
                    "| {} | {} | {} |\n",
                    Self::escape_markdown_table_cell(&candidate.name),
                    Self::escape_markdown_table_cell(&candidate.id),
                    Self::display_price(
                        symbol,
                        candidate.price,
                        candidate.has_multiple_prices,
                        candidate.lowest_price
                    )
                ));
            }
            output.push('\n');
        }
    }

    fn render_dangling(&self, output: &mut String, dangling: &[String]) {
        output.push_str("## Unresolved Selections\n\n");
        output.push_str("These ids are not in the catalog and were treated as unselected.\n\n");
        for id in dangling {
            output.push_str(&format!("- `{}`\n", id));
        }
        output.push('\n');
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, report: &BuildReport) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, report);
        self.render_compatibility(&mut output, report);
        self.render_line_items(&mut output, report);

        if !report.eligible.is_empty() {
            self.render_eligible(&mut output, &report.eligible, &report.currency_symbol);
        }

        if !report.dangling_selections.is_empty() {
            self.render_dangling(&mut output, &report.dangling_selections);
        }

        Ok(output)
    }
}
