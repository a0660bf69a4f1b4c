use crate::ports::outbound::DocumentReader;
use crate::sbom_engine::domain::Document;
use crate::shared::error::SbomError;
use crate::shared::security::{ensure_regular_file, ensure_size_within, MAX_DOCUMENT_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading CycloneDX JSON documents from disk
///
/// Files go through the security checks in `shared::security` (no symlinks,
/// regular files only, size limit) before they are read.
pub struct FileSystemReader {
    max_size: u64,
}

impl FileSystemReader {
    pub fn new() -> Self {
        Self {
            max_size: MAX_DOCUMENT_SIZE,
        }
    }

    #[cfg(test)]
    fn with_max_size(max_size: u64) -> Self {
        Self { max_size }
    }

    fn read_checked(&self, path: &Path) -> Result<String> {
        let size = ensure_regular_file(path)?;
        ensure_size_within(path, size, self.max_size)?;

        fs::read_to_string(path).map_err(|e| {
            SbomError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentReader for FileSystemReader {
    fn read_document(&self, path: &Path) -> Result<Document> {
        let content = self.read_checked(path)?;

        let document: Document =
            serde_json::from_str(&content).map_err(|e| SbomError::DocumentParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        tracing::debug!(
            path = %path.display(),
            components = document.component_count(),
            "document loaded"
        );
        Ok(document)
    }
}
