use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use crate::ports::outbound::OutputPresenter;
use std::path::PathBuf;

/// Where a rendered build report is delivered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterType {
    Stdout,
    File(PathBuf),
}

impl From<Option<PathBuf>> for PresenterType {
    /// `--output` path if given, stdout otherwise
    fn from(output: Option<PathBuf>) -> Self {
        output.map_or(Self::Stdout, Self::File)
    }
}

/// Builds the presenter for a report destination
pub struct PresenterFactory;

impl PresenterFactory {
    /// ```
    /// use pc_configurator::application::factories::{PresenterFactory, PresenterType};
    ///
    /// let presenter = PresenterFactory::create(PresenterType::from(None));
    /// ```
    pub fn create(presenter_type: PresenterType) -> Box<dyn OutputPresenter> {
        match presenter_type {
            PresenterType::Stdout => Box::new(StdoutPresenter::new()),
            PresenterType::File(path) => Box::new(FileSystemWriter::new(path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presenter_type_from_output_option() {
        assert_eq!(PresenterType::from(None), PresenterType::Stdout);
        assert_eq!(
            PresenterType::from(Some(PathBuf::from("report.md"))),
            PresenterType::File(PathBuf::from("report.md"))
        );
    }

    #[test]
    fn test_file_presenter_writes_report() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("build-report.md");

        PresenterFactory::create(PresenterType::from(Some(path.clone())))
            .present("# PC Build Report\n")
            .unwrap();

        assert_eq!(std::fs::read_to_string(path).unwrap(), "# PC Build Report\n");
    }
}
