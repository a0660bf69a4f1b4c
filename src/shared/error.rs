use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between an SBOM that failed
/// validation and a request that could not be processed at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - document is valid, or unification completed
    Success = 0,
    /// The validation report contains at least one error-level issue
    ValidationFailed = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (file I/O, unparsable document, rejected request, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ValidationFailed => write!(f, "Validation Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for SBOM validation and unification.
///
/// Findings about a document are never errors; they are returned as
/// validation issues. These variants describe requests that cannot be
/// processed at all.
#[derive(Debug, Error)]
pub enum SbomError {
    #[error("SBOM document not found: {path}\n\n💡 Hint: {suggestion}")]
    DocumentNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse SBOM document: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file contains a CycloneDX JSON document")]
    DocumentParseError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Unification requires at least 2 SBOM documents, got {provided}\n\n💡 Hint: Pass two or more documents to merge")]
    InsufficientSources { provided: usize },

    #[error("SBOM source \"{source_name}\" failed structural validation with {error_count} error(s)\n\n💡 Hint: Fix the reported errors or merge with the permissive policy")]
    InvalidSource {
        source_name: String,
        error_count: usize,
    },

    /// Validation error for configuration values and builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::ValidationFailed.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::ValidationFailed),
            "Validation Failed (1)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_document_not_found_display() {
        let error = SbomError::DocumentNotFound {
            path: PathBuf::from("/test/bom.cdx.json"),
            suggestion: "Check the path".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("SBOM document not found"));
        assert!(display.contains("/test/bom.cdx.json"));
        assert!(display.contains("💡 Hint:"));
        assert!(display.contains("Check the path"));
    }

    #[test]
    fn test_document_parse_error_display() {
        let error = SbomError::DocumentParseError {
            path: PathBuf::from("/test/bom.json"),
            details: "expected value at line 1".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to parse SBOM document"));
        assert!(display.contains("expected value at line 1"));
    }

    #[test]
    fn test_insufficient_sources_display() {
        let error = SbomError::InsufficientSources { provided: 1 };
        let display = format!("{}", error);
        assert!(display.contains("at least 2"));
        assert!(display.contains("got 1"));
    }

    #[test]
    fn test_invalid_source_display() {
        let error = SbomError::InvalidSource {
            source_name: "service-a".to_string(),
            error_count: 3,
        };
        let display = format!("{}", error);
        assert!(display.contains("service-a"));
        assert!(display.contains("3 error(s)"));
        assert!(display.contains("permissive"));
    }

    #[test]
    fn test_security_error_display() {
        let error = SbomError::SecurityError {
            path: PathBuf::from("/test/symlink"),
            reason: "Symbolic links are not allowed".to_string(),
            hint: "Use a regular file instead".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Security violation"));
        assert!(display.contains("Symbolic links are not allowed"));
        assert!(display.contains("Use a regular file instead"));
    }
}
