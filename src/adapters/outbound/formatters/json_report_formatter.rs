use crate::ports::outbound::ReportFormatter;
use crate::sbom_engine::domain::ValidationReport;
use crate::shared::Result;

/// JsonReportFormatter adapter for the machine-readable validation report
///
/// Output shape: `{"valid", "issues": [{"level", "message", "path"?}], "schemaVersion"}`.
pub struct JsonReportFormatter;

impl JsonReportFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonReportFormatter {
    fn format_report(&self, report: &ValidationReport, _source: &str) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}
