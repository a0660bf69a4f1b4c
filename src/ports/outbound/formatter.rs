use crate::sbom_engine::domain::{Document, ValidationReport};
use crate::shared::Result;

/// ReportFormatter port for rendering validation reports
///
/// This port abstracts the report output format (JSON, Markdown, etc.).
pub trait ReportFormatter {
    /// Renders a validation report for the document at `source`
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format_report(&self, report: &ValidationReport, source: &str) -> Result<String>;
}

/// DocumentFormatter port for serializing a document
pub trait DocumentFormatter {
    fn format_document(&self, document: &Document) -> Result<String>;
}
