use crate::application::dto::{ValidateRequest, ValidateResponse};
use crate::ports::outbound::{DocumentReader, ProgressReporter, VcsProbe};
use crate::sbom_engine::domain::{
    ReachabilityOutcome, ValidationIssue, ValidationReport, VcsReference,
};
use crate::sbom_engine::services::{collect_vcs_references, reachability_issue, SbomValidator};
use crate::shared::Result;
use futures::stream::{self, StreamExt};
use std::time::Duration;

/// Upper bound on VCS probes in flight at once
const MAX_CONCURRENT_PROBES: usize = 8;

/// ValidateSbomUseCase - reads a document, validates it and optionally
/// probes its VCS references
///
/// # Type Parameters
/// * `R` - DocumentReader implementation
/// * `V` - VcsProbe implementation (only used when probing is requested)
/// * `PR` - ProgressReporter implementation
pub struct ValidateSbomUseCase<R, V, PR> {
    document_reader: R,
    vcs_probe: Option<V>,
    progress_reporter: PR,
}

impl<R, V, PR> ValidateSbomUseCase<R, V, PR>
where
    R: DocumentReader,
    V: VcsProbe,
    PR: ProgressReporter,
{
    pub fn new(document_reader: R, vcs_probe: Option<V>, progress_reporter: PR) -> Self {
        Self {
            document_reader,
            vcs_probe,
            progress_reporter,
        }
    }

    /// Executes the validation use case
    ///
    /// Findings about the document end up in the report; only an unreadable
    /// or unparsable document is an error.
    pub async fn execute(&self, request: ValidateRequest) -> Result<ValidateResponse> {
        self.progress_reporter.report(&format!(
            "📖 Loading SBOM document from: {}",
            request.document_path.display()
        ));
        let document = self.document_reader.read_document(&request.document_path)?;
        self.progress_reporter.report(&format!(
            "✅ Loaded {} component(s)",
            document.component_count()
        ));

        self.progress_reporter.report(&format!(
            "🔍 Validating against CycloneDX {}...",
            request.target
        ));
        let mut issues = SbomValidator::document_issues(&document, request.target);

        let references = collect_vcs_references(&document);
        let probed_references = match &self.vcs_probe {
            Some(probe) if request.check_vcs && !references.is_empty() => {
                issues.extend(
                    self.probe_references(probe, &references, request.vcs_timeout)
                        .await,
                );
                references.len()
            }
            _ => {
                issues.extend(
                    references
                        .iter()
                        .map(|r| reachability_issue(r, &ReachabilityOutcome::NotChecked)),
                );
                0
            }
        };

        let report = ValidationReport::from_issues(
            issues,
            SbomValidator::schema_version(&document, request.target),
        );
        self.report_summary(&report);

        Ok(ValidateResponse::new(report, probed_references))
    }

    /// Probes every reference concurrently; results come back in document order.
    async fn probe_references(
        &self,
        probe: &V,
        references: &[VcsReference],
        timeout: Duration,
    ) -> Vec<ValidationIssue> {
        let total = references.len();
        self.progress_reporter.report(&format!(
            "🌐 Checking {} VCS reference(s)...",
            total
        ));

        let mut outcomes: Vec<(usize, ReachabilityOutcome)> =
            stream::iter(references.iter().enumerate())
                .map(|(index, reference)| async move {
                    let outcome = match tokio::time::timeout(timeout, probe.probe(&reference.url))
                        .await
                    {
                        Ok(outcome) => outcome,
                        Err(_) => {
                            tracing::debug!(url = %reference.url, "VCS probe timed out");
                            ReachabilityOutcome::TimedOut { after: timeout }
                        }
                    };
                    (index, outcome)
                })
                .buffer_unordered(MAX_CONCURRENT_PROBES)
                .enumerate()
                .map(|(done, result)| {
                    let url = &references[result.0].url;
                    self.progress_reporter
                        .report_progress(done + 1, total, Some(url));
                    result
                })
                .collect()
                .await;

        outcomes.sort_by_key(|(index, _)| *index);
        outcomes
            .iter()
            .map(|(index, outcome)| reachability_issue(&references[*index], outcome))
            .collect()
    }

    fn report_summary(&self, report: &ValidationReport) {
        let message = format!(
            "{} {} error(s), {} warning(s)",
            if report.valid {
                "✅ Document is valid:"
            } else {
                "❌ Document is invalid:"
            },
            report.error_count(),
            report.warning_count()
        );
        self.progress_reporter.report_completion(&message);
    }
}
