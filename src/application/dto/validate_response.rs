use crate::sbom_engine::domain::ValidationReport;

/// ValidateResponse - Response DTO from the validation use case
#[derive(Debug, Clone)]
pub struct ValidateResponse {
    pub report: ValidationReport,
    /// Number of VCS references that were probed (0 when probing is off)
    pub probed_references: usize,
}

impl ValidateResponse {
    pub fn new(report: ValidationReport, probed_references: usize) -> Self {
        Self {
            report,
            probed_references,
        }
    }
}
