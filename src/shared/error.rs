use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems and storefront tooling to distinguish
/// between different types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - no critical issues, or critical issues not treated as failure
    Success = 0,
    /// Critical compatibility issues were found and `fail_on_critical` is enabled
    CriticalIssuesDetected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (file I/O, parse error, invalid configuration, etc.)
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
            ExitCode::CriticalIssuesDetected => write!(f, "Critical Issues Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for loading catalogs and builds and writing reports.
///
/// The engine itself never produces these; they come from the host layers.
#[derive(Debug, Error)]
pub enum ConfiguratorError {
    #[error("Catalog file not found: {path}\n\n💡 Hint: {suggestion}")]
    CatalogNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse catalog file: {path}\nDetails: {details}\n\n💡 Hint: The catalog must map category keys (cpu, gpu, keyboard, ...) to arrays of components")]
    CatalogParseError { path: PathBuf, details: String },

    #[error("Failed to parse build file: {path}\nDetails: {details}\n\n💡 Hint: A build file has 'selection', 'peripherals' and 'variants' sections")]
    BuildFileParseError { path: PathBuf, details: String },

    #[error("Duplicate component id '{id}' in category '{category}'\n\n💡 Hint: Component ids must be unique within their category")]
    DuplicateComponentId { category: String, id: String },

    #[error("Invalid category: {value}\n\n💡 Hint: Valid build categories are: {valid}")]
    InvalidCategory { value: String, valid: String },

    #[error("Unsupported file format: {path}\n\n💡 Hint: Use a .json, .yml, .yaml or .toml file")]
    UnsupportedFileFormat { path: PathBuf },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
