/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, session state).
pub mod build_reader;
pub mod catalog_reader;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_formatter;

pub use build_reader::{BuildDocument, BuildReader};
pub use catalog_reader::{CatalogLoadResult, CatalogReader};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;

/// Variant choices are owned by the caller's session; the engine only reads them.
pub use crate::build_configuration::domain::VariantSelectionStore;
