use crate::application::dto::{UnifyRequest, UnifyResponse};
use crate::ports::inbound::SbomEnginePort;
use crate::ports::outbound::{DocumentReader, ProgressReporter};
use crate::sbom_engine::domain::SbomSource;
use crate::shared::Result;
use std::path::Path;

/// UnifySbomsUseCase - reads every input document and merges them
///
/// # Type Parameters
/// * `R` - DocumentReader implementation
/// * `E` - SbomEnginePort implementation
/// * `PR` - ProgressReporter implementation
pub struct UnifySbomsUseCase<R, E, PR> {
    document_reader: R,
    engine: E,
    progress_reporter: PR,
}

impl<R, E, PR> UnifySbomsUseCase<R, E, PR>
where
    R: DocumentReader,
    E: SbomEnginePort,
    PR: ProgressReporter,
{
    pub fn new(document_reader: R, engine: E, progress_reporter: PR) -> Self {
        Self {
            document_reader,
            engine,
            progress_reporter,
        }
    }

    pub fn execute(&self, request: UnifyRequest) -> Result<UnifyResponse> {
        let mut sources = Vec::with_capacity(request.document_paths.len());
        for path in &request.document_paths {
            self.progress_reporter
                .report(&format!("📖 Loading SBOM document from: {}", path.display()));
            let document = self.document_reader.read_document(path)?;
            sources.push(SbomSource::new(&source_label(path), document));
        }

        self.progress_reporter.report(&format!(
            "🔗 Unifying {} SBOM(s) with the {} policy...",
            sources.len(),
            request.policy
        ));
        let outcome = self
            .engine
            .unify(sources, &request.config, request.policy)?;

        for warning in &outcome.warnings {
            self.progress_reporter.report_warning(&warning.message);
        }
        self.progress_reporter.report_completion(&format!(
            "✅ Unified {} SBOM(s) into \"{}\": {} component(s)",
            outcome.sources_count, request.config.app_name, outcome.components_count
        ));

        Ok(outcome.into())
    }
}

/// Label used for a source without `metadata.component`: the file name
/// without `.json` and `.cdx` extensions.
fn source_label(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let stem = file_name.strip_suffix(".json").unwrap_or(&file_name);
    let stem = stem.strip_suffix(".cdx").unwrap_or(stem);
    stem.to_string()
}
