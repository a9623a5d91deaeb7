//! Compatibility and configuration engine
//!
//! Pure, synchronous logic over an in-memory catalog: compatibility rules,
//! category filtering, variant pricing and build totals.

pub mod domain;
pub mod policies;
pub mod services;
