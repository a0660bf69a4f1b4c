use super::path::ComponentPath;
use std::time::Duration;

/// A version-control reference declared by a component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VcsReference {
    pub path: ComponentPath,
    pub component_name: String,
    pub url: String,
}

/// Result of probing a VCS URL. None of these is ever a validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReachabilityOutcome {
    Reachable,
    Unreachable { reason: String },
    TimedOut { after: Duration },
    /// The URL was not probed (unsupported scheme, malformed URL, ...).
    Skipped { reason: String },
    /// No probe ran at all (synchronous validation).
    NotChecked,
}

impl ReachabilityOutcome {
    pub fn is_reachable(&self) -> bool {
        matches!(self, ReachabilityOutcome::Reachable)
    }
}
