use super::id_generator::{IdGenerator, UuidGenerator};
use super::structural_validator::StructuralValidator;
use crate::sbom_engine::domain::{
    count_components, Component, ComponentType, Dependency, Document, MergePolicy, Metadata,
    OrganizationalEntity, SbomSource, SpecVersion, UnifyConfig, UnifyOutcome, ValidationIssue,
    BOM_FORMAT,
};
use crate::sbom_engine::policies::{GostAttribute, GostLevel};
use crate::shared::error::SbomError;
use crate::shared::Result;
use chrono::Utc;
use serde_json::json;
use std::collections::{HashMap, HashSet};

/// Spec version of every unified document.
const OUTPUT_SPEC_VERSION: SpecVersion = SpecVersion::V1_6;

/// Merges several SBOM documents into one under a synthetic application root.
///
/// Each input becomes one top-level component (its `metadata.component`, or a
/// placeholder named after the source label) with the input's components as
/// children. Colliding bom-refs are renamed and the source's dependency edges
/// are rewritten to match.
pub struct Unifier<G: IdGenerator = UuidGenerator> {
    ids: G,
}

impl<G: IdGenerator> Unifier<G> {
    pub fn new(ids: G) -> Self {
        Self { ids }
    }

    pub fn unify(
        &self,
        sources: Vec<SbomSource>,
        config: &UnifyConfig,
        policy: MergePolicy,
    ) -> Result<UnifyOutcome> {
        match policy {
            MergePolicy::Strict => self.unify_strict(sources, config),
            MergePolicy::Permissive => self.unify_permissive(sources, config),
        }
    }

    /// Rejects the request on the first source with structural errors.
    pub fn unify_strict(
        &self,
        sources: Vec<SbomSource>,
        config: &UnifyConfig,
    ) -> Result<UnifyOutcome> {
        ensure_enough_sources(&sources)?;

        for source in &sources {
            let error_count = structural_error_count(&source.document);
            if error_count > 0 {
                return Err(SbomError::InvalidSource {
                    source_name: source.label.clone(),
                    error_count,
                }
                .into());
            }
        }

        Ok(self.merge(sources, config, Vec::new()))
    }

    /// Merges every source; structurally invalid ones are reported as warnings.
    pub fn unify_permissive(
        &self,
        sources: Vec<SbomSource>,
        config: &UnifyConfig,
    ) -> Result<UnifyOutcome> {
        ensure_enough_sources(&sources)?;

        let warnings = sources
            .iter()
            .filter_map(|source| {
                let error_count = structural_error_count(&source.document);
                (error_count > 0).then(|| {
                    ValidationIssue::warning(format!(
                        "Source \"{}\" has {} structural error(s); merged anyway",
                        source.label, error_count
                    ))
                })
            })
            .collect();

        Ok(self.merge(sources, config, warnings))
    }

    fn merge(
        &self,
        sources: Vec<SbomSource>,
        config: &UnifyConfig,
        warnings: Vec<ValidationIssue>,
    ) -> UnifyOutcome {
        let sources_count = sources.len();
        let root_ref = format!("unified-{}", self.ids.generate());
        let root = Component::new(ComponentType::Application, &config.app_name)
            .with_version(&config.app_version)
            .with_ref(&root_ref);

        let mut collected: HashSet<String> = HashSet::from([root_ref.clone()]);
        let mut forest = Vec::with_capacity(sources_count);
        let mut dependencies = Vec::new();

        for source in sources {
            let (node, edges) = self.place_source(source, &mut collected);
            forest.push(node);
            dependencies.extend(edges);
        }

        if config.link_sources {
            let source_refs: Vec<String> = forest
                .iter()
                .filter_map(|node| node.bom_ref.clone())
                .collect();
            dependencies.insert(
                0,
                Dependency {
                    bom_ref: Some(root_ref),
                    depends_on: source_refs,
                },
            );
        }

        let components_count = 1 + count_components(&forest);
        let document = Document {
            bom_format: Some(BOM_FORMAT.to_string()),
            spec_version: Some(OUTPUT_SPEC_VERSION.as_str().to_string()),
            serial_number: Some(format!("urn:uuid:{}", self.ids.generate())),
            version: Some(1),
            metadata: Some(Metadata {
                timestamp: Some(Utc::now().to_rfc3339()),
                tools: Some(json!({
                    "components": [{
                        "type": "application",
                        "name": env!("CARGO_PKG_NAME"),
                        "version": env!("CARGO_PKG_VERSION"),
                    }]
                })),
                component: Some(root),
                manufacturer: (!config.manufacturer.is_empty())
                    .then(|| OrganizationalEntity::named(&config.manufacturer)),
                ..Default::default()
            }),
            components: Some(forest),
            dependencies: Some(dependencies),
            ..Default::default()
        };

        UnifyOutcome {
            document,
            components_count,
            sources_count,
            warnings,
        }
    }

    /// Builds the per-source node and the source's rewritten dependency edges.
    fn place_source(
        &self,
        source: SbomSource,
        collected: &mut HashSet<String>,
    ) -> (Component, Vec<Dependency>) {
        let SbomSource { label, document } = source;
        let Document {
            metadata,
            components,
            dependencies,
            ..
        } = document;

        let mut node = metadata
            .and_then(|m| m.component)
            .unwrap_or_else(|| Component::new(ComponentType::Application, &label));
        node.components.extend(components.unwrap_or_default());
        if node.reference().is_none() {
            node.bom_ref = Some(format!("source-{}", self.ids.generate()));
        }
        raise_to_subtree_peak(&mut node);

        let mut seen = HashSet::new();
        let mut renames = HashMap::new();
        self.resolve_collisions(&mut node, collected, &mut seen, &mut renames);
        collected.extend(seen);

        let edges = dependencies
            .unwrap_or_default()
            .into_iter()
            .map(|edge| rewrite_edge(edge, &renames))
            .collect();

        (node, edges)
    }

    /// Pre-order rename of refs already collected from earlier sources or
    /// repeated within this one.
    fn resolve_collisions(
        &self,
        component: &mut Component,
        collected: &HashSet<String>,
        seen: &mut HashSet<String>,
        renames: &mut HashMap<String, String>,
    ) {
        if let Some(old) = component.reference().map(str::to_string) {
            if collected.contains(&old) || seen.contains(&old) {
                let renamed = self.fresh_ref(&old, collected, seen);
                tracing::debug!(
                    from = %old,
                    to = %renamed,
                    component = %component.name,
                    "renamed colliding bom-ref"
                );
                if collected.contains(&old) {
                    renames.entry(old).or_insert_with(|| renamed.clone());
                }
                component.bom_ref = Some(renamed.clone());
                seen.insert(renamed);
            } else {
                seen.insert(old);
            }
        }

        for child in &mut component.components {
            self.resolve_collisions(child, collected, seen, renames);
        }
    }

    fn fresh_ref(&self, old: &str, collected: &HashSet<String>, seen: &HashSet<String>) -> String {
        loop {
            let candidate = format!("{}-{}", old, self.ids.generate());
            if !collected.contains(&candidate) && !seen.contains(&candidate) {
                return candidate;
            }
        }
    }
}

fn ensure_enough_sources(sources: &[SbomSource]) -> Result<()> {
    if sources.len() < 2 {
        return Err(SbomError::InsufficientSources {
            provided: sources.len(),
        }
        .into());
    }
    Ok(())
}

fn structural_error_count(document: &Document) -> usize {
    StructuralValidator::validate(document, OUTPUT_SPEC_VERSION)
        .iter()
        .filter(|issue| issue.is_error())
        .count()
}

fn rewrite_edge(edge: Dependency, renames: &HashMap<String, String>) -> Dependency {
    let rename = |r: String| renames.get(&r).cloned().unwrap_or(r);
    Dependency {
        bom_ref: edge.bom_ref.map(rename),
        depends_on: edge.depends_on.into_iter().map(rename).collect(),
    }
}

/// Raises each declared-or-unset GOST attribute of `node` to the highest level
/// found anywhere in its subtree.
fn raise_to_subtree_peak(node: &mut Component) {
    for attribute in GostAttribute::ALL {
        let own = attribute.read(node).level();
        let peak = node
            .components
            .iter()
            .filter_map(|child| subtree_max(attribute, child))
            .max();
        if let Some(peak) = peak {
            if own.map_or(true, |level| level < peak) {
                attribute.write(node, peak);
            }
        }
    }
}

fn subtree_max(attribute: GostAttribute, component: &Component) -> Option<GostLevel> {
    let own = attribute.read(component).level();
    component
        .components
        .iter()
        .filter_map(|child| subtree_max(attribute, child))
        .chain(own)
        .max()
}
