use crate::adapters::outbound::formatters::{JsonReportFormatter, MarkdownFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ReportFormatter;

/// Factory for creating validation report formatters
///
/// This factory encapsulates the selection of formatter adapters, so the CLI
/// only deals with the `OutputFormat` it parsed.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a report formatter for the specified output format
    ///
    /// # Examples
    /// ```
    /// use sbom_unify::application::dto::OutputFormat;
    /// use sbom_unify::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Markdown);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn ReportFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonReportFormatter::new()),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use sbom_unify::application::dto::OutputFormat;
    /// use sbom_unify::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Json);
    /// assert_eq!(message, "📝 Rendering JSON validation report...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Rendering JSON validation report...",
            OutputFormat::Markdown => "📝 Rendering Markdown validation report...",
        }
    }
}
