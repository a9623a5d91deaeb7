//! pc-configurator - compatibility and pricing engine for custom PC builds
//!
//! Checks a part selection against a catalog, reports compatibility issues by
//! severity, filters eligible parts for each build slot and prices the build with
//! per-component variant choices. Follows hexagonal architecture and Domain-Driven
//! Design principles.
//!
//! # Architecture
//!
//! - **Domain Layer** (`build_configuration`): Pure rules, filters and pricing
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use pc_configurator::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = CheckBuildUseCase::new(
//!     FileSystemReader::new(),
//!     FileSystemReader::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = CheckBuildRequest::new(
//!     PathBuf::from("catalog.json"),
//!     PathBuf::from("build.yml"),
//! );
//! let response = use_case.execute(request)?;
//!
//! let report = BuildReportBuilder::build(&response, "£");
//! let output = MarkdownFormatter::new().format(&report)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod build_configuration;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::memory::InMemoryVariantStore;
    pub use crate::application::dto::{CheckBuildRequest, CheckBuildResponse, OutputFormat};
    pub use crate::application::read_models::{BuildReport, BuildReportBuilder};
    pub use crate::application::use_cases::CheckBuildUseCase;
    pub use crate::build_configuration::domain::{
        BuildCategory, Catalog, Category, CompatibilityIssue, Component, ComponentLookup,
        ComponentSpec, PeripheralCategory, PeripheralSelection, Selection, Severity,
        VariantSelection,
    };
    pub use crate::build_configuration::services::{
        BuildTotalCalculator, CategoryFilter, CompatibilityEvaluator, IssueReporter,
        VariantResolver,
    };
    pub use crate::ports::outbound::{
        BuildDocument, BuildReader, CatalogLoadResult, CatalogReader, OutputPresenter,
        ProgressReporter, ReportFormatter, VariantSelectionStore,
    };
    pub use crate::shared::Result;
}
