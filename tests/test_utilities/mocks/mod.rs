/// Mock implementations for testing
mod mock_document_reader;
mod mock_progress_reporter;
mod mock_vcs_probe;

pub use mock_document_reader::MockDocumentReader;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_vcs_probe::MockVcsProbe;
