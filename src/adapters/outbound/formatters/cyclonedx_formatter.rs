use crate::ports::outbound::DocumentFormatter;
use crate::sbom_engine::domain::Document;
use crate::shared::Result;

/// CycloneDxFormatter adapter for writing a document as CycloneDX JSON
///
/// Fields the model does not know about are written back as they were read.
pub struct CycloneDxFormatter;

impl CycloneDxFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CycloneDxFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentFormatter for CycloneDxFormatter {
    fn format_document(&self, document: &Document) -> Result<String> {
        let json = serde_json::to_string_pretty(document)?;
        Ok(json)
    }
}
