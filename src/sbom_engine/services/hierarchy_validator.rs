use crate::sbom_engine::domain::{
    walk_forest, Component, ComponentPath, ComponentType, Document, ValidationIssue,
};
use crate::sbom_engine::policies::{GostAttribute, GostLevel, GostValue};

/// Highest declared level found in a subtree, and where it was found.
struct Peak<'a> {
    level: GostLevel,
    path: ComponentPath,
    name: &'a str,
}

/// HierarchyValidator enforces the GOST/FSTEC ordering rule.
///
/// For every component, its declared level of each attribute must be at least
/// the highest level declared anywhere below it. Unset attributes never
/// produce an ordering error and never raise the floor for ancestors on
/// their own. Secondary checks (missing or unrecognised attributes, missing
/// VCS references) are advisory only.
pub struct HierarchyValidator;

impl HierarchyValidator {
    pub fn validate(document: &Document) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        for attribute in GostAttribute::ALL {
            Self::check_ordering(document.components(), attribute, &mut issues);
        }
        Self::check_attribute_presence(document.components(), &mut issues);
        Self::check_vcs_presence(document.components(), &mut issues);

        issues
    }

    fn check_ordering(
        forest: &[Component],
        attribute: GostAttribute,
        issues: &mut Vec<ValidationIssue>,
    ) {
        for (i, component) in forest.iter().enumerate() {
            Self::subtree_peak(component, ComponentPath::top(i), attribute, issues);
        }
    }

    /// Post-order walk returning the effective level of `component` for its
    /// ancestors: `max(declared, highest descendant)`. An error is recorded
    /// whenever the declared level is below the highest descendant, and the
    /// walk continues with the raised level so that violations further up
    /// are still reported.
    fn subtree_peak<'a>(
        component: &'a Component,
        path: ComponentPath,
        attribute: GostAttribute,
        issues: &mut Vec<ValidationIssue>,
    ) -> Option<Peak<'a>> {
        let mut descendant_peak: Option<Peak<'a>> = None;
        for (i, child) in component.components.iter().enumerate() {
            let Some(peak) = Self::subtree_peak(child, path.child(i), attribute, issues) else {
                continue;
            };
            // first in document order wins ties
            if descendant_peak.as_ref().map_or(true, |best| peak.level > best.level) {
                descendant_peak = Some(peak);
            }
        }

        match (attribute.read(component).level(), descendant_peak) {
            (Some(own), Some(peak)) if own < peak.level => {
                issues.push(
                    ValidationIssue::error(format!(
                        "{} of \"{}\" is \"{}\" but descendant \"{}\" at {} is \"{}\"; a component must be at least as exposed as anything it contains",
                        attribute,
                        display_name(component),
                        own,
                        peak.name,
                        peak.path,
                        peak.level
                    ))
                    .at(&path),
                );
                Some(peak)
            }
            (Some(own), _) => Some(Peak {
                level: own,
                path,
                name: display_name(component),
            }),
            (None, peak) => peak,
        }
    }

    fn check_attribute_presence(forest: &[Component], issues: &mut Vec<ValidationIssue>) {
        walk_forest(forest, |path, component| {
            for attribute in GostAttribute::ALL {
                match attribute.read(component) {
                    GostValue::Level(_) => {}
                    GostValue::Unset => issues.push(
                        ValidationIssue::warning(format!(
                            "Component \"{}\" is missing {}",
                            display_name(component),
                            attribute
                        ))
                        .at(path),
                    ),
                    GostValue::Unrecognized(raw) => issues.push(
                        ValidationIssue::warning(format!(
                            "Component \"{}\" has unrecognized {} value \"{}\" (expected yes, indirect or no)",
                            display_name(component),
                            attribute,
                            raw
                        ))
                        .at(path),
                    ),
                }
            }
        });
    }

    /// Own code (applications) and libraries should point at their sources.
    /// Operating systems and frameworks are exempt.
    fn check_vcs_presence(forest: &[Component], issues: &mut Vec<ValidationIssue>) {
        walk_forest(forest, |path, component| {
            let needs_vcs = matches!(
                component.kind(),
                Some(ComponentType::Application) | Some(ComponentType::Library)
            );
            if needs_vcs && component.vcs_references().next().is_none() {
                issues.push(
                    ValidationIssue::warning(format!(
                        "Component \"{}\" has no VCS reference; add an externalReferences entry with type \"vcs\"",
                        display_name(component)
                    ))
                    .at(path),
                );
            }
        });
    }
}

fn display_name(component: &Component) -> &str {
    if component.name.is_empty() {
        "?"
    } else {
        &component.name
    }
}
