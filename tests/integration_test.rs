/// Integration tests for the application layer
mod test_utilities;

use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Duration;
use test_utilities::mocks::*;
use sbom_unify::prelude::*;
use sbom_unify::sbom_engine::services::known_refs;

const EMPTY_NAME: &str = r#"{
  "bomFormat": "CycloneDX",
  "specVersion": "1.6",
  "components": [{"type": "library", "name": "", "bom-ref": "a"}]
}"#;

const FRONTEND: &str = r#"{
  "bomFormat": "CycloneDX",
  "specVersion": "1.6",
  "metadata": {
    "timestamp": "2026-01-01T00:00:00Z",
    "component": {"type": "application", "name": "frontend", "bom-ref": "root"}
  },
  "components": [
    {
      "type": "library",
      "name": "react",
      "version": "18.2.0",
      "bom-ref": "pkg:npm/react@18.2.0",
      "externalReferences": [{"type": "vcs", "url": "https://github.com/facebook/react"}]
    }
  ],
  "dependencies": [{"ref": "root", "dependsOn": ["pkg:npm/react@18.2.0"]}]
}"#;

const BACKEND: &str = r#"{
  "bomFormat": "CycloneDX",
  "specVersion": "1.6",
  "metadata": {
    "timestamp": "2026-01-01T00:00:00Z",
    "component": {"type": "application", "name": "backend", "bom-ref": "root"}
  },
  "components": [
    {
      "type": "library",
      "name": "serde",
      "version": "1.0.0",
      "bom-ref": "pkg:cargo/serde@1.0.0",
      "externalReferences": [{"type": "vcs", "url": "https://github.com/serde-rs/serde"}]
    }
  ],
  "dependencies": [{"ref": "root", "dependsOn": ["pkg:cargo/serde@1.0.0"]}]
}"#;

const TRANSITIVE_VIOLATION: &str = r#"{
  "bomFormat": "CycloneDX",
  "specVersion": "1.6",
  "components": [
    {
      "type": "application",
      "name": "gateway",
      "bom-ref": "gateway",
      "properties": [
        {"name": "cdx:gost:attack_surface", "value": "no"},
        {"name": "cdx:gost:security_function", "value": "no"}
      ],
      "components": [
        {
          "type": "framework",
          "name": "http",
          "bom-ref": "http",
          "components": [
            {
              "type": "library",
              "name": "tls",
              "bom-ref": "tls",
              "properties": [
                {"name": "cdx:gost:attack_surface", "value": "yes"},
                {"name": "cdx:gost:security_function", "value": "indirect"}
              ]
            }
          ]
        }
      ]
    }
  ]
}"#;

fn all_refs(forest: &[Component], refs: &mut Vec<String>) {
    for component in forest {
        if let Some(r) = component.reference() {
            refs.push(r.to_string());
        }
        all_refs(&component.components, refs);
    }
}

#[tokio::test]
async fn test_validate_reports_empty_name() {
    let reader = MockDocumentReader::new().with_document("bom.json", EMPTY_NAME);
    let progress_reporter = MockProgressReporter::new();
    let use_case: ValidateSbomUseCase<_, MockVcsProbe, _> =
        ValidateSbomUseCase::new(reader, None, progress_reporter.clone());

    let response = use_case
        .execute(ValidateRequest::new(PathBuf::from("bom.json"), SpecVersion::V1_6))
        .await
        .unwrap();

    let report = response.report;
    assert!(!report.valid);
    assert_eq!(report.schema_version, "1.6");
    assert!(report
        .issues_at("$.components[0]")
        .any(|i| i.level == IssueLevel::Error && i.message.contains("name")));
    assert_eq!(response.probed_references, 0);
    assert!(progress_reporter.has_message_containing("Loading SBOM document"));
}

#[tokio::test]
async fn test_validate_transitive_hierarchy_violation() {
    let reader = MockDocumentReader::new().with_document("bom.json", TRANSITIVE_VIOLATION);
    let use_case: ValidateSbomUseCase<_, MockVcsProbe, _> =
        ValidateSbomUseCase::new(reader, None, MockProgressReporter::new());

    let report = use_case
        .execute(ValidateRequest::new(PathBuf::from("bom.json"), SpecVersion::V1_6))
        .await
        .unwrap()
        .report;

    assert!(!report.valid);
    // the unset middle node does not hide the grandchild from the root
    let root_errors: Vec<_> = report
        .issues_at("$.components[0]")
        .filter(|i| i.is_error())
        .collect();
    assert_eq!(root_errors.len(), 2);
    assert!(root_errors
        .iter()
        .any(|i| i.message.contains("GOST:attack_surface") && i.message.contains("tls")));
    assert!(root_errors
        .iter()
        .any(|i| i.message.contains("GOST:security_function")));
    assert!(report
        .issues_at("$.components[0].components[0]")
        .all(|i| !i.is_error()));
}

#[tokio::test]
async fn test_validate_with_probe_folds_outcomes() {
    let reader = MockDocumentReader::new().with_document("frontend.json", FRONTEND);
    let probe = MockVcsProbe::new().with_outcome(
        "https://github.com/facebook/react",
        ReachabilityOutcome::Unreachable {
            reason: "HTTP 404 Not Found".to_string(),
        },
    );
    let progress_reporter = MockProgressReporter::new();
    let use_case = ValidateSbomUseCase::new(reader, Some(probe.clone()), progress_reporter.clone());

    let request = ValidateRequest::new(PathBuf::from("frontend.json"), SpecVersion::V1_6)
        .with_vcs_check(Duration::from_secs(5));
    let response = use_case.execute(request).await.unwrap();

    assert_eq!(response.probed_references, 1);
    assert_eq!(probe.probed_urls(), vec!["https://github.com/facebook/react"]);
    let unreachable: Vec<_> = response
        .report
        .issues
        .iter()
        .filter(|i| i.message.contains("unreachable"))
        .collect();
    assert_eq!(unreachable.len(), 1);
    assert_eq!(unreachable[0].level, IssueLevel::Warning);
    // reachability never invalidates the document
    assert_eq!(response.report.error_count(), 0);
    assert!(progress_reporter.has_message_containing("Progress: 1/1"));
}

#[tokio::test]
async fn test_validate_missing_document_is_an_error() {
    let use_case: ValidateSbomUseCase<_, MockVcsProbe, _> =
        ValidateSbomUseCase::new(MockDocumentReader::new(), None, MockProgressReporter::new());

    let result = use_case
        .execute(ValidateRequest::new(PathBuf::from("missing.json"), SpecVersion::V1_6))
        .await;

    let err = result.unwrap_err();
    assert!(err.to_string().contains("SBOM document not found"));
}

#[test]
fn test_unify_two_documents_with_same_root_ref() {
    let reader = MockDocumentReader::new()
        .with_document("frontend.cdx.json", FRONTEND)
        .with_document("backend.cdx.json", BACKEND);
    let progress_reporter = MockProgressReporter::new();
    let use_case = UnifySbomsUseCase::new(
        reader,
        SbomEngine::with_id_generator(SequentialIdGenerator::new()),
        progress_reporter.clone(),
    );

    let request = UnifyRequest::new(
        vec![
            PathBuf::from("frontend.cdx.json"),
            PathBuf::from("backend.cdx.json"),
        ],
        UnifyConfig::new("Unified", "1.0.0", "Acme"),
        MergePolicy::Strict,
    );
    let response = use_case.execute(request).unwrap();

    assert_eq!(response.sources_count, 2);
    assert!(response.components_count >= 3);
    let root = response.document.root_component().unwrap();
    assert_eq!(root.name, "Unified");

    let mut refs = Vec::new();
    all_refs(std::slice::from_ref(root), &mut refs);
    all_refs(response.document.components(), &mut refs);
    let unique: HashSet<_> = refs.iter().collect();
    assert_eq!(unique.len(), refs.len(), "duplicate refs in {:?}", refs);

    // the backend's edge follows its renamed root
    let edges = response.document.dependencies();
    assert_eq!(edges.len(), 2);
    assert_eq!(edges[0].bom_ref.as_deref(), Some("root"));
    let renamed = response.document.components()[1].reference().unwrap();
    assert_ne!(renamed, "root");
    assert_eq!(edges[1].bom_ref.as_deref(), Some(renamed));

    let known = known_refs(&response.document);
    for edge in edges {
        assert!(known.contains(edge.bom_ref.as_deref().unwrap()));
        assert!(edge.depends_on.iter().all(|r| known.contains(r.as_str())));
    }

    let report = SbomValidator::validate(&response.document);
    assert_eq!(report.error_count(), 0, "{:?}", report.issues);
    assert!(progress_reporter.has_message_containing("Completed: "));
}

#[test]
fn test_unify_strict_rejects_invalid_source() {
    let reader = MockDocumentReader::new()
        .with_document("frontend.json", FRONTEND)
        .with_document("broken.json", EMPTY_NAME);
    let use_case = UnifySbomsUseCase::new(reader, SbomEngine::new(), MockProgressReporter::new());

    let request = UnifyRequest::new(
        vec![PathBuf::from("frontend.json"), PathBuf::from("broken.json")],
        UnifyConfig::default(),
        MergePolicy::Strict,
    );
    let err = use_case.execute(request).unwrap_err();

    let error = err.downcast_ref::<SbomError>().unwrap();
    assert!(matches!(
        error,
        SbomError::InvalidSource { error_count: 1, .. }
    ));
}

#[test]
fn test_unify_permissive_reports_warning() {
    let reader = MockDocumentReader::new()
        .with_document("frontend.json", FRONTEND)
        .with_document("broken.json", EMPTY_NAME);
    let progress_reporter = MockProgressReporter::new();
    let use_case = UnifySbomsUseCase::new(reader, SbomEngine::new(), progress_reporter.clone());

    let request = UnifyRequest::new(
        vec![PathBuf::from("frontend.json"), PathBuf::from("broken.json")],
        UnifyConfig::default(),
        MergePolicy::Permissive,
    );
    let response = use_case.execute(request).unwrap();

    assert_eq!(response.sources_count, 2);
    assert_eq!(response.warnings.len(), 1);
    assert!(progress_reporter.has_message_containing("Warning: "));
    // the placeholder node is named after the file
    assert_eq!(response.document.components()[1].name, "broken");
}

#[test]
fn test_unify_single_source_is_rejected() {
    let reader = MockDocumentReader::new().with_document("frontend.json", FRONTEND);
    let use_case = UnifySbomsUseCase::new(reader, SbomEngine::new(), MockProgressReporter::new());

    let request = UnifyRequest::new(
        vec![PathBuf::from("frontend.json")],
        UnifyConfig::default(),
        MergePolicy::Strict,
    );
    let err = use_case.execute(request).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<SbomError>(),
        Some(SbomError::InsufficientSources { provided: 1 })
    ));
}

#[test]
fn test_report_formatters_render_same_report() {
    let document: Document = serde_json::from_str(EMPTY_NAME).unwrap();
    let report = SbomValidator::validate(&document);

    let json = JsonReportFormatter::new()
        .format_report(&report, "bom.json")
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["valid"], false);

    let markdown = MarkdownFormatter::new()
        .format_report(&report, "bom.json")
        .unwrap();
    assert!(markdown.contains("## Errors"));
    assert!(markdown.contains("$.components[0]"));
}

#[tokio::test]
async fn test_report_echoes_document_spec_version() {
    let reader = MockDocumentReader::new().with_document(
        "old.json",
        r#"{"bomFormat": "CycloneDX", "specVersion": "1.4", "components": []}"#,
    );
    let use_case: ValidateSbomUseCase<_, MockVcsProbe, _> =
        ValidateSbomUseCase::new(reader, None, MockProgressReporter::new());

    let report = use_case
        .execute(ValidateRequest::new(PathBuf::from("old.json"), SpecVersion::V1_6))
        .await
        .unwrap()
        .report;

    assert_eq!(report.schema_version, "1.4");
    assert!(report
        .issues_at("$.specVersion")
        .any(|i| i.level == IssueLevel::Warning));
}
