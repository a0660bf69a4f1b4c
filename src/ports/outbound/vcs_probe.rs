use crate::sbom_engine::domain::ReachabilityOutcome;
use async_trait::async_trait;

/// VcsProbe port for checking that a version-control repository is reachable
///
/// This port abstracts the network access used to probe repository URLs
/// found in `externalReferences`.
///
/// # Async Support
/// Probes run concurrently, so implementations must be `Send + Sync`.
/// The caller bounds each probe with its own timeout; an implementation only
/// has to report what it observed.
#[async_trait]
pub trait VcsProbe: Send + Sync {
    /// Probes a single repository URL
    ///
    /// Failures are outcomes, not errors: a refused connection or an HTTP 404
    /// is reported as `ReachabilityOutcome::Unreachable`.
    async fn probe(&self, url: &str) -> ReachabilityOutcome;
}
