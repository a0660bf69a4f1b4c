mod hierarchy_validator;
mod id_generator;
mod sbom_validator;
mod structural_validator;
mod unifier;
mod vcs_references;

pub use hierarchy_validator::HierarchyValidator;
pub use id_generator::{IdGenerator, SequentialIdGenerator, UuidGenerator};
pub use sbom_validator::SbomValidator;
pub use structural_validator::{known_refs, StructuralValidator};
pub use unifier::Unifier;
pub use vcs_references::{collect_vcs_references, reachability_issue};
