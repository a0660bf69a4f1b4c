use crate::sbom_engine::domain::{MergePolicy, UnifyConfig};
use std::path::PathBuf;

/// UnifyRequest - Request DTO for the unification use case
#[derive(Debug, Clone)]
pub struct UnifyRequest {
    /// Input documents, merged in this order
    pub document_paths: Vec<PathBuf>,
    pub config: UnifyConfig,
    pub policy: MergePolicy,
}

impl UnifyRequest {
    pub fn new(document_paths: Vec<PathBuf>, config: UnifyConfig, policy: MergePolicy) -> Self {
        Self {
            document_paths,
            config,
            policy,
        }
    }
}
