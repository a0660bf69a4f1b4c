use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use crate::ports::outbound::OutputPresenter;
use std::path::PathBuf;

/// Presenter type enumeration for factory pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterType {
    Stdout,
    File(PathBuf),
}

/// Factory for creating output presenters
///
/// Reports and unified documents go either to stdout or to the `--output` file.
pub struct PresenterFactory;

impl PresenterFactory {
    /// Creates a presenter instance for the specified type
    ///
    /// # Examples
    /// ```
    /// use sbom_unify::application::factories::{PresenterFactory, PresenterType};
    ///
    /// let presenter = PresenterFactory::create(PresenterType::Stdout);
    /// ```
    pub fn create(presenter_type: PresenterType) -> Box<dyn OutputPresenter> {
        match presenter_type {
            PresenterType::Stdout => Box::new(StdoutPresenter::new()),
            PresenterType::File(path) => Box::new(FileSystemWriter::new(path)),
        }
    }

    /// Stdout when no output path was given, a file otherwise
    pub fn for_output(output: Option<PathBuf>) -> Box<dyn OutputPresenter> {
        Self::create(output.map_or(PresenterType::Stdout, PresenterType::File))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_for_output_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.json");

        PresenterFactory::for_output(Some(path.clone()))
            .present("{\"valid\":true}")
            .unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{\"valid\":true}");
    }

    #[test]
    fn test_for_output_defaults_to_stdout() {
        assert!(PresenterFactory::for_output(None).present("{}").is_ok());
    }
}
