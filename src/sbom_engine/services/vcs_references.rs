use crate::sbom_engine::domain::{
    walk_forest, Document, ReachabilityOutcome, ValidationIssue, VcsReference,
};

/// Collects every version-control reference in the forest, in document order.
pub fn collect_vcs_references(document: &Document) -> Vec<VcsReference> {
    let mut references = Vec::new();
    walk_forest(document.components(), |path, component| {
        for reference in component.vcs_references() {
            references.push(VcsReference {
                path: path.clone(),
                component_name: component.name.clone(),
                url: reference.url.clone(),
            });
        }
    });
    references
}

/// Folds a probe outcome into an issue at the component's path.
///
/// Reachability depends on the network, not on the document, so the result
/// is `info` or at most `warning`, never `error`.
pub fn reachability_issue(reference: &VcsReference, outcome: &ReachabilityOutcome) -> ValidationIssue {
    let issue = match outcome {
        ReachabilityOutcome::Reachable => ValidationIssue::info(format!(
            "VCS repository {} of \"{}\" is reachable",
            reference.url, reference.component_name
        )),
        ReachabilityOutcome::Unreachable { reason } => ValidationIssue::warning(format!(
            "VCS repository {} of \"{}\" is unreachable: {}",
            reference.url, reference.component_name, reason
        )),
        ReachabilityOutcome::TimedOut { after } => ValidationIssue::info(format!(
            "VCS reachability check for {} of \"{}\" timed out after {}s",
            reference.url,
            reference.component_name,
            after.as_secs()
        )),
        ReachabilityOutcome::Skipped { reason } => ValidationIssue::info(format!(
            "VCS reachability check for {} of \"{}\" skipped: {}",
            reference.url, reference.component_name, reason
        )),
        ReachabilityOutcome::NotChecked => ValidationIssue::info(format!(
            "VCS reachability of {} of \"{}\" was not checked",
            reference.url, reference.component_name
        )),
    };
    issue.at(&reference.path)
}
