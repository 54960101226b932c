//! Validation module for rule configurations.
//!
//! This module provides exhaustive, deterministic validation over the raw
//! configuration value:
//! - Structural checks: required sections, field types, array shapes
//! - Referential checks: safe places must be declared places
//! - Domain checks: disposition enum values, bitmask integer range
//!
//! Every defect is collected into one report; nothing short-circuits.

mod checks;
mod report;


// Re-export public API
pub use checks::{REQUIRED_SECTIONS, validate};
pub use report::ValidationReport;
