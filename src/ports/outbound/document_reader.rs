use crate::sbom_engine::domain::Document;
use crate::shared::Result;
use std::path::Path;

/// DocumentReader port for loading SBOM documents
///
/// This port abstracts where documents come from (local files, uploads, etc.).
/// Implementations reject input that is not JSON or cannot be mapped onto a
/// document at all; everything else is left for the validator to report.
pub trait DocumentReader {
    /// Reads and parses a CycloneDX JSON document
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or cannot be read
    /// - The file fails the security checks (symlink, size, file type)
    /// - The content is not a JSON object
    fn read_document(&self, path: &Path) -> Result<Document>;
}
