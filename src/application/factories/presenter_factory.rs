use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use crate::ports::outbound::OutputPresenter;
use std::path::{Path, PathBuf};

/// File name of the report when no output path is given
pub const DEFAULT_REPORT_FILENAME: &str = "os_compat.csv";

/// Where the finished report goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterType {
    Stdout,
    File(PathBuf),
}

impl PresenterType {
    /// Default report location: `<home>/Downloads/os_compat.csv`
    pub fn default_file(home: &Path) -> Self {
        PresenterType::File(home.join("Downloads").join(DEFAULT_REPORT_FILENAME))
    }

    /// Human-readable destination for progress messages
    pub fn describe(&self) -> String {
        match self {
            PresenterType::Stdout => "stdout".to_string(),
            PresenterType::File(path) => path.display().to_string(),
        }
    }
}

/// Factory for creating output presenters
///
/// This factory encapsulates the creation logic for different presenter implementations.
/// It belongs in the application layer as it selects infrastructure adapters
/// based on the run's options.
pub struct PresenterFactory;

impl PresenterFactory {
    /// Creates a presenter instance for the specified type
    ///
    /// # Examples
    /// ```
    /// use mac_compat::application::factories::{PresenterFactory, PresenterType};
    ///
    /// let presenter = PresenterFactory::create(PresenterType::Stdout);
    /// ```
    pub fn create(presenter_type: PresenterType) -> Box<dyn OutputPresenter> {
        match presenter_type {
            PresenterType::Stdout => Box::new(StdoutPresenter::new()),
            PresenterType::File(path) => Box::new(FileSystemWriter::new(path)),
        }
    }
}
