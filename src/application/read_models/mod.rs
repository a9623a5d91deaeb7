//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of a checked build for output.

pub mod build_report;
pub mod build_report_builder;

pub use build_report::{
    BuildReport, CandidateView, EligibleView, IssueView, LineItemView, OptionView,
    ReportMetadataView,
};
pub use build_report_builder::{BuildReportBuilder, DEFAULT_CURRENCY_SYMBOL};
