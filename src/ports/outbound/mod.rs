/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, network, console, etc.).
pub mod document_reader;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod vcs_probe;

pub use document_reader::DocumentReader;
pub use formatter::{DocumentFormatter, ReportFormatter};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use vcs_probe::VcsProbe;
