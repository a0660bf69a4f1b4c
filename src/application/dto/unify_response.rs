use crate::sbom_engine::domain::{Document, UnifyOutcome, ValidationIssue};

/// UnifyResponse - Response DTO from the unification use case
#[derive(Debug, Clone)]
pub struct UnifyResponse {
    /// The merged document
    pub document: Document,
    /// Recursive component count, synthetic root included
    pub components_count: usize,
    pub sources_count: usize,
    /// Warnings for inputs merged despite structural errors
    pub warnings: Vec<ValidationIssue>,
}

impl From<UnifyOutcome> for UnifyResponse {
    fn from(outcome: UnifyOutcome) -> Self {
        Self {
            document: outcome.document,
            components_count: outcome.components_count,
            sources_count: outcome.sources_count,
            warnings: outcome.warnings,
        }
    }
}
