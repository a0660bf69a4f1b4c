pub mod component;
pub mod document;
mod lenient;
pub mod path;
pub mod reachability;
pub mod spec_version;
pub mod unification;
pub mod validation;

pub use component::{
    count_components, Component, ComponentType, ExternalReference, License, LicenseChoice,
    Property, Scope,
};
pub use document::{Dependency, Document, Metadata, OrganizationalEntity, BOM_FORMAT};
pub use path::{walk_forest, ComponentPath};
pub use reachability::{ReachabilityOutcome, VcsReference};
pub use spec_version::SpecVersion;
pub use unification::{MergePolicy, SbomSource, UnifyConfig, UnifyOutcome};
pub use validation::{IssueLevel, ValidationIssue, ValidationReport};
