use crate::sbom_engine::domain::{
    walk_forest, Component, ComponentType, Document, SpecVersion, ValidationIssue, BOM_FORMAT,
};
use std::collections::{HashMap, HashSet};
use std::fmt::Display;

const ROOT_COMPONENT_PATH: &str = "$.metadata.component";

/// StructuralValidator checks a document against CycloneDX structural rules.
///
/// Every check runs regardless of earlier failures so that the caller can
/// show all problems at once. The validator never fails: malformed input is
/// exactly what it describes.
pub struct StructuralValidator;

impl StructuralValidator {
    pub fn validate(document: &Document, target: SpecVersion) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        Self::check_bom_format(document, &mut issues);
        Self::check_spec_version(document, target, &mut issues);
        Self::check_metadata(document, &mut issues);
        Self::check_content_present(document, &mut issues);

        if let Some(root) = document.root_component() {
            Self::check_component(root, ROOT_COMPONENT_PATH, &mut issues);
        }
        walk_forest(document.components(), |path, component| {
            Self::check_component(component, path, &mut issues);
        });

        Self::check_ref_uniqueness(document, &mut issues);
        Self::check_dependency_refs(document, &mut issues);

        issues
    }

    fn check_bom_format(document: &Document, issues: &mut Vec<ValidationIssue>) {
        match document.bom_format.as_deref() {
            Some(BOM_FORMAT) => {}
            Some(other) => issues.push(
                ValidationIssue::error(format!(
                    "bomFormat must be \"{}\", got \"{}\"",
                    BOM_FORMAT, other
                ))
                .at("$.bomFormat"),
            ),
            None => issues.push(
                ValidationIssue::error(format!(
                    "bomFormat is missing; expected \"{}\"",
                    BOM_FORMAT
                ))
                .at("$.bomFormat"),
            ),
        }
    }

    fn check_spec_version(
        document: &Document,
        target: SpecVersion,
        issues: &mut Vec<ValidationIssue>,
    ) {
        match document.spec_version.as_deref() {
            Some(version) if version == target.as_str() => {}
            Some(version) => issues.push(
                ValidationIssue::warning(format!(
                    "specVersion \"{}\" does not match the targeted version {}; some checks may not apply",
                    version, target
                ))
                .at("$.specVersion"),
            ),
            None => issues.push(
                ValidationIssue::warning(format!(
                    "specVersion is missing; validating against {}",
                    target
                ))
                .at("$.specVersion"),
            ),
        }
    }

    fn check_metadata(document: &Document, issues: &mut Vec<ValidationIssue>) {
        let Some(metadata) = &document.metadata else {
            issues.push(ValidationIssue::warning("metadata section is missing").at("$.metadata"));
            return;
        };

        if metadata.timestamp.as_deref().map_or(true, str::is_empty) {
            issues.push(
                ValidationIssue::warning("metadata has no timestamp").at("$.metadata.timestamp"),
            );
        }
    }

    fn check_content_present(document: &Document, issues: &mut Vec<ValidationIssue>) {
        if document.components.is_none() && !document.has_vulnerabilities() {
            issues.push(
                ValidationIssue::warning("Document contains neither components nor vulnerabilities")
                    .at("$"),
            );
        }
    }

    fn check_component(component: &Component, path: impl Display, issues: &mut Vec<ValidationIssue>) {
        if component.name.trim().is_empty() {
            issues.push(
                ValidationIssue::error("Component is missing required field \"name\"")
                    .at(&path),
            );
        }

        match component.component_type.as_deref() {
            None | Some("") => issues.push(
                ValidationIssue::error(format!(
                    "Component \"{}\" is missing required field \"type\"",
                    display_name(component)
                ))
                .at(&path),
            ),
            Some(raw) if raw.parse::<ComponentType>().is_err() => issues.push(
                ValidationIssue::error(format!(
                    "Component \"{}\" has unknown type \"{}\"",
                    display_name(component),
                    raw
                ))
                .at(&path),
            ),
            Some(_) => {}
        }

        if let Some(raw) = component.scope.as_deref() {
            if component.scope().is_none() {
                issues.push(
                    ValidationIssue::warning(format!(
                        "Component \"{}\" has unknown scope \"{}\" (expected required, optional or excluded)",
                        display_name(component),
                        raw
                    ))
                    .at(&path),
                );
            }
        }
    }

    /// One error per occurrence of a bom-ref that appears more than once.
    fn check_ref_uniqueness(document: &Document, issues: &mut Vec<ValidationIssue>) {
        let occurrences = collect_ref_occurrences(document);

        let mut by_ref: HashMap<&str, Vec<&str>> = HashMap::new();
        for (bom_ref, path) in &occurrences {
            by_ref.entry(bom_ref).or_default().push(path);
        }

        for (bom_ref, path) in &occurrences {
            let paths = &by_ref[bom_ref.as_str()];
            if paths.len() < 2 {
                continue;
            }
            let others: Vec<&str> = paths
                .iter()
                .copied()
                .filter(|p| *p != path.as_str())
                .collect();
            issues.push(
                ValidationIssue::error(format!(
                    "Duplicate bom-ref \"{}\" (also used at {})",
                    bom_ref,
                    others.join(", ")
                ))
                .at(path),
            );
        }
    }

    /// Dangling dependency refs are warnings: documents may point at
    /// components described only by purl outside the component list.
    fn check_dependency_refs(document: &Document, issues: &mut Vec<ValidationIssue>) {
        let known = known_refs(document);

        for (i, dependency) in document.dependencies().iter().enumerate() {
            if let Some(bom_ref) = dependency.bom_ref.as_deref().filter(|r| !r.is_empty()) {
                if !known.contains(bom_ref) {
                    issues.push(
                        ValidationIssue::warning(format!(
                            "Dependency ref \"{}\" does not match any component bom-ref",
                            bom_ref
                        ))
                        .at(format!("$.dependencies[{}]", i)),
                    );
                }
            }

            for (j, target) in dependency.depends_on.iter().enumerate() {
                if !known.contains(target.as_str()) {
                    issues.push(
                        ValidationIssue::warning(format!(
                            "dependsOn ref \"{}\" does not match any component bom-ref",
                            target
                        ))
                        .at(format!("$.dependencies[{}].dependsOn[{}]", i, j)),
                    );
                }
            }
        }
    }
}

/// Every non-empty bom-ref with the rendered path of its component, in
/// document order (`metadata.component` first).
fn collect_ref_occurrences(document: &Document) -> Vec<(String, String)> {
    let mut occurrences = Vec::new();
    if let Some(bom_ref) = document.root_component().and_then(Component::reference) {
        occurrences.push((bom_ref.to_string(), ROOT_COMPONENT_PATH.to_string()));
    }
    walk_forest(document.components(), |path, component| {
        if let Some(bom_ref) = component.reference() {
            occurrences.push((bom_ref.to_string(), path.to_string()));
        }
    });
    occurrences
}

/// All bom-refs a dependency edge may legitimately point at.
pub fn known_refs(document: &Document) -> HashSet<&str> {
    let mut refs = HashSet::new();
    if let Some(bom_ref) = document.root_component().and_then(Component::reference) {
        refs.insert(bom_ref);
    }
    walk_forest(document.components(), |_, component| {
        if let Some(bom_ref) = component.reference() {
            refs.insert(bom_ref);
        }
    });
    refs
}

fn display_name(component: &Component) -> &str {
    if component.name.is_empty() {
        "?"
    } else {
        &component.name
    }
}
