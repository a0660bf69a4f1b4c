use crate::sbom_engine::domain::{
    Document, MergePolicy, SbomSource, SpecVersion, UnifyConfig, UnifyOutcome, ValidationReport,
};
use crate::shared::Result;

/// SbomEnginePort - Inbound port for the validation and unification engine
///
/// This port defines the interface that external adapters (CLI, API, etc.)
/// use to validate and merge SBOM documents. Both operations are pure: they
/// never mutate their inputs and never touch the network.
pub trait SbomEnginePort {
    /// Validates a document against the default target spec version (1.6)
    ///
    /// Document problems are returned as issues in the report, never as errors.
    fn validate(&self, document: &Document) -> ValidationReport;

    /// Validates a document against an explicit target spec version
    ///
    /// # Arguments
    /// * `document` - The parsed CycloneDX document
    /// * `target` - Spec version the document is expected to declare
    fn validate_with_target(&self, document: &Document, target: SpecVersion) -> ValidationReport;

    /// Merges two or more documents under a synthetic application root
    ///
    /// # Arguments
    /// * `sources` - Input documents with their labels, in merge order
    /// * `config` - Identity of the synthetic root application
    /// * `policy` - Whether structurally invalid inputs reject the request
    ///
    /// # Errors
    /// Returns an error if:
    /// - Fewer than 2 sources are given
    /// - The policy is strict and a source has structural errors
    fn unify(
        &self,
        sources: Vec<SbomSource>,
        config: &UnifyConfig,
        policy: MergePolicy,
    ) -> Result<UnifyOutcome>;
}
