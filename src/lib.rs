//! Rulebook: validation and normalization engine for game-session rule
//! configurations.
//!
//! Operator-authored rule files arrive as loosely-typed nested data. The
//! engine validates them exhaustively (every defect collected, never just the
//! first), normalizes the five-category item taxonomy into typed structures,
//! scans for cross-category display-name collisions, decodes the
//! teammate-behavior bitmask, and assembles a fully-typed, default-completed
//! rule set for the rest of the application.
//!
//! Entry points:
//! - [`rules::RuleParser`] - the parsing facade with its strict/lenient policy
//! - [`validate::validate`] - standalone exhaustive validation
//! - [`items::ItemCatalog`] - drop pools and airdrop options over the
//!   normalized item configuration

pub mod behavior;
pub mod cli;
pub mod commands;
pub mod error;
pub mod exit_codes;
pub mod items;
mod raw;
pub mod rules;
pub mod validate;

#[cfg(test)]
mod test_support;
