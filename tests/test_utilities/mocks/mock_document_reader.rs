use std::collections::HashMap;
use std::path::{Path, PathBuf};
use sbom_unify::prelude::*;

/// Mock DocumentReader serving in-memory JSON documents keyed by path
#[derive(Default)]
pub struct MockDocumentReader {
    documents: HashMap<PathBuf, String>,
}

impl MockDocumentReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, path: &str, json: &str) -> Self {
        self.documents.insert(PathBuf::from(path), json.to_string());
        self
    }
}

impl DocumentReader for MockDocumentReader {
    fn read_document(&self, path: &Path) -> Result<Document> {
        let json = self.documents.get(path).ok_or_else(|| SbomError::DocumentNotFound {
            path: path.to_path_buf(),
            suggestion: "No mock document registered for this path".to_string(),
        })?;
        serde_json::from_str(json).map_err(|e| {
            SbomError::DocumentParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
