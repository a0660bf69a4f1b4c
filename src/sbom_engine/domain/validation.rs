use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueLevel {
    Error,
    Warning,
    Info,
}

impl IssueLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueLevel::Error => "error",
            IssueLevel::Warning => "warning",
            IssueLevel::Info => "info",
        }
    }
}

impl fmt::Display for IssueLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single finding about a document. Pure data; never mutates the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub level: IssueLevel,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl ValidationIssue {
    pub fn new(level: IssueLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            path: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(IssueLevel::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(IssueLevel::Warning, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(IssueLevel::Info, message)
    }

    /// Attaches a location (a `ComponentPath` or a document path such as `$.metadata`).
    pub fn at(mut self, path: impl fmt::Display) -> Self {
        self.path = Some(path.to_string());
        self
    }

    pub fn is_error(&self) -> bool {
        self.level == IssueLevel::Error
    }
}

/// Outcome of validating one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub issues: Vec<ValidationIssue>,
    #[serde(rename = "schemaVersion")]
    pub schema_version: String,
}

impl ValidationReport {
    /// Builds a report; `valid` is derived, never set by hand.
    pub fn from_issues(issues: Vec<ValidationIssue>, schema_version: &str) -> Self {
        Self {
            valid: !issues.iter().any(ValidationIssue::is_error),
            issues,
            schema_version: schema_version.to_string(),
        }
    }

    pub fn count(&self, level: IssueLevel) -> usize {
        self.issues.iter().filter(|i| i.level == level).count()
    }

    pub fn error_count(&self) -> usize {
        self.count(IssueLevel::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(IssueLevel::Warning)
    }

    pub fn issues_at<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a ValidationIssue> {
        self.issues
            .iter()
            .filter(move |i| i.path.as_deref() == Some(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_derived_from_errors() {
        let report = ValidationReport::from_issues(
            vec![ValidationIssue::warning("w"), ValidationIssue::info("i")],
            "1.6",
        );
        assert!(report.valid);

        let report = ValidationReport::from_issues(
            vec![ValidationIssue::warning("w"), ValidationIssue::error("e")],
            "1.6",
        );
        assert!(!report.valid);
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.warning_count(), 1);
    }

    #[test]
    fn test_report_json_shape() {
        let report = ValidationReport::from_issues(
            vec![
                ValidationIssue::error("bad name").at("$.components[0]"),
                ValidationIssue::warning("no metadata"),
            ],
            "1.6",
        );
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["valid"], false);
        assert_eq!(value["schemaVersion"], "1.6");
        assert_eq!(value["issues"][0]["level"], "error");
        assert_eq!(value["issues"][0]["path"], "$.components[0]");
        assert!(value["issues"][1].get("path").is_none());
    }

    #[test]
    fn test_issues_at() {
        let report = ValidationReport::from_issues(
            vec![
                ValidationIssue::error("a").at("$.components[0]"),
                ValidationIssue::warning("b").at("$.components[1]"),
                ValidationIssue::warning("c").at("$.components[0]"),
            ],
            "1.6",
        );
        assert_eq!(report.issues_at("$.components[0]").count(), 2);
    }
}
