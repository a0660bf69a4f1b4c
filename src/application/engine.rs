use crate::ports::inbound::SbomEnginePort;
use crate::sbom_engine::domain::{
    Document, MergePolicy, SbomSource, SpecVersion, UnifyConfig, UnifyOutcome, ValidationReport,
};
use crate::sbom_engine::services::{IdGenerator, SbomValidator, Unifier, UuidGenerator};
use crate::shared::Result;

/// SbomEngine - the engine behind the `SbomEnginePort`
///
/// Stateless apart from the injected id generator: every call is a pure
/// function of its arguments.
pub struct SbomEngine<G: IdGenerator = UuidGenerator> {
    unifier: Unifier<G>,
}

impl SbomEngine<UuidGenerator> {
    pub fn new() -> Self {
        Self::with_id_generator(UuidGenerator::new())
    }
}

impl Default for SbomEngine<UuidGenerator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator> SbomEngine<G> {
    /// Creates an engine with a specific id source (deterministic ids in tests)
    pub fn with_id_generator(ids: G) -> Self {
        Self {
            unifier: Unifier::new(ids),
        }
    }
}

impl<G: IdGenerator> SbomEnginePort for SbomEngine<G> {
    fn validate(&self, document: &Document) -> ValidationReport {
        SbomValidator::validate(document)
    }

    fn validate_with_target(&self, document: &Document, target: SpecVersion) -> ValidationReport {
        SbomValidator::validate_with_target(document, target)
    }

    fn unify(
        &self,
        sources: Vec<SbomSource>,
        config: &UnifyConfig,
        policy: MergePolicy,
    ) -> Result<UnifyOutcome> {
        self.unifier.unify(sources, config, policy)
    }
}
