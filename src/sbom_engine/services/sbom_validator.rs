use super::hierarchy_validator::HierarchyValidator;
use super::structural_validator::StructuralValidator;
use super::vcs_references::{collect_vcs_references, reachability_issue};
use crate::sbom_engine::domain::{
    Document, ReachabilityOutcome, SpecVersion, ValidationIssue, ValidationReport,
};

/// SbomValidator runs the structural and hierarchy checks and builds the report.
///
/// Pure and synchronous: VCS references are reported as "not checked". The
/// validation use case replaces those with real probe outcomes.
pub struct SbomValidator;

impl SbomValidator {
    pub fn validate(document: &Document) -> ValidationReport {
        Self::validate_with_target(document, SpecVersion::default())
    }

    pub fn validate_with_target(document: &Document, target: SpecVersion) -> ValidationReport {
        let mut issues = Self::document_issues(document, target);
        issues.extend(
            collect_vcs_references(document)
                .iter()
                .map(|r| reachability_issue(r, &ReachabilityOutcome::NotChecked)),
        );
        ValidationReport::from_issues(issues, Self::schema_version(document, target))
    }

    /// The document's own `specVersion`, or the target when it declares none.
    pub fn schema_version(document: &Document, target: SpecVersion) -> &str {
        document
            .spec_version
            .as_deref()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(target.as_str())
    }

    /// Structural issues followed by hierarchy issues, without reachability findings.
    pub fn document_issues(document: &Document, target: SpecVersion) -> Vec<ValidationIssue> {
        let mut issues = StructuralValidator::validate(document, target);
        issues.extend(HierarchyValidator::validate(document));
        issues
    }
}
