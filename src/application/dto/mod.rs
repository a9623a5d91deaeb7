/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod check_build_request;
mod check_build_response;
mod output_format;

pub use check_build_request::CheckBuildRequest;
pub use check_build_response::{
    Candidate, CheckBuildResponse, EligibleCandidates, LineItem,
};
pub use output_format::OutputFormat;
