use crate::sbom_engine::domain::SpecVersion;
use std::path::PathBuf;
use std::time::Duration;

/// Default per-probe timeout for VCS reachability checks
pub const DEFAULT_VCS_TIMEOUT: Duration = Duration::from_secs(10);

/// ValidateRequest - Request DTO for the validation use case
#[derive(Debug, Clone)]
pub struct ValidateRequest {
    /// Path to the CycloneDX JSON document
    pub document_path: PathBuf,
    /// Spec version the document is expected to declare
    pub target: SpecVersion,
    /// Probe VCS references over the network
    pub check_vcs: bool,
    /// Upper bound for each individual probe
    pub vcs_timeout: Duration,
}

impl ValidateRequest {
    pub fn new(document_path: PathBuf, target: SpecVersion) -> Self {
        Self {
            document_path,
            target,
            check_vcs: false,
            vcs_timeout: DEFAULT_VCS_TIMEOUT,
        }
    }

    pub fn with_vcs_check(mut self, timeout: Duration) -> Self {
        self.check_vcs = true;
        self.vcs_timeout = timeout;
        self
    }
}
