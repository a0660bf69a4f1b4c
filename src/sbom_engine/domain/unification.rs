use super::document::Document;
use super::validation::ValidationIssue;
use std::fmt;
use std::str::FromStr;

/// Identity of the synthetic application that wraps the merged documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnifyConfig {
    pub app_name: String,
    pub app_version: String,
    pub manufacturer: String,
    /// Emit a leading `root -> [per-source nodes]` dependency edge.
    pub link_sources: bool,
}

impl UnifyConfig {
    pub fn new(app_name: &str, app_version: &str, manufacturer: &str) -> Self {
        Self {
            app_name: app_name.to_string(),
            app_version: app_version.to_string(),
            manufacturer: manufacturer.to_string(),
            link_sources: false,
        }
    }

    pub fn with_link_sources(mut self, link_sources: bool) -> Self {
        self.link_sources = link_sources;
        self
    }
}

impl Default for UnifyConfig {
    /// No manufacturer: the output omits `metadata.manufacturer`.
    fn default() -> Self {
        Self::new("Unified Application", "1.0.0", "")
    }
}

/// An input document plus a label (usually the file stem) used when the
/// document has no `metadata.component` of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct SbomSource {
    pub label: String,
    pub document: Document,
}

impl SbomSource {
    pub fn new(label: &str, document: Document) -> Self {
        Self {
            label: label.to_string(),
            document,
        }
    }
}

/// How to treat inputs that fail structural validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergePolicy {
    /// Reject the whole request on the first invalid input.
    #[default]
    Strict,
    /// Merge anyway and surface a warning per invalid input.
    Permissive,
}

impl FromStr for MergePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(MergePolicy::Strict),
            "permissive" => Ok(MergePolicy::Permissive),
            _ => Err(format!(
                "Invalid merge policy: {}. Please specify 'strict' or 'permissive'",
                s
            )),
        }
    }
}

impl fmt::Display for MergePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergePolicy::Strict => write!(f, "strict"),
            MergePolicy::Permissive => write!(f, "permissive"),
        }
    }
}

/// The merged document and merge statistics.
#[derive(Debug, Clone)]
pub struct UnifyOutcome {
    pub document: Document,
    /// Recursive component count including the synthetic root and per-source nodes.
    pub components_count: usize,
    pub sources_count: usize,
    /// One warning per input that failed structural validation (permissive merges only).
    pub warnings: Vec<ValidationIssue>,
}
