/// Formatter adapters for documents and validation reports
mod cyclonedx_formatter;
mod json_report_formatter;
mod markdown_formatter;

pub use cyclonedx_formatter::CycloneDxFormatter;
pub use json_report_formatter::JsonReportFormatter;
pub use markdown_formatter::MarkdownFormatter;
