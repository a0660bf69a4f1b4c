use crate::ports::outbound::ReportFormatter;
use crate::sbom_engine::domain::{IssueLevel, ValidationIssue, ValidationReport};
use crate::shared::Result;

const TABLE_HEADER: &str = "| Level | Path | Message |\n";
const TABLE_SEPARATOR: &str = "|-------|------|---------|\n";

/// MarkdownFormatter adapter for a human-readable validation report
///
/// Issues are grouped by level (errors first) into Markdown tables.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn level_badge(level: IssueLevel) -> &'static str {
        match level {
            IssueLevel::Error => "❌ error",
            IssueLevel::Warning => "⚠️ warning",
            IssueLevel::Info => "ℹ️ info",
        }
    }

    fn render_section(output: &mut String, title: &str, issues: &[&ValidationIssue]) {
        if issues.is_empty() {
            return;
        }
        output.push_str(&format!("\n## {} ({})\n\n", title, issues.len()));
        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);
        for issue in issues {
            let path = issue
                .path
                .as_deref()
                .map(|p| format!("`{}`", Self::escape_table_cell(p)))
                .unwrap_or_else(|| "-".to_string());
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                Self::level_badge(issue.level),
                path,
                Self::escape_table_cell(&issue.message)
            ));
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format_report(&self, report: &ValidationReport, source: &str) -> Result<String> {
        let mut output = String::new();
        output.push_str("# SBOM Validation Report\n\n");
        output.push_str(&format!("- **Document**: `{}`\n", Self::escape_table_cell(source)));
        output.push_str(&format!(
            "- **Spec version**: {}\n",
            report.schema_version
        ));
        output.push_str(&format!(
            "- **Result**: {}\n",
            if report.valid { "✅ valid" } else { "❌ invalid" }
        ));
        output.push_str(&format!(
            "- **Issues**: {} error(s), {} warning(s), {} info\n",
            report.error_count(),
            report.warning_count(),
            report.count(IssueLevel::Info)
        ));

        for (level, title) in [
            (IssueLevel::Error, "Errors"),
            (IssueLevel::Warning, "Warnings"),
            (IssueLevel::Info, "Info"),
        ] {
            let issues: Vec<&ValidationIssue> =
                report.issues.iter().filter(|i| i.level == level).collect();
            Self::render_section(&mut output, title, &issues);
        }

        if report.issues.is_empty() {
            output.push_str("\nNo issues found.\n");
        }
        Ok(output)
    }
}
