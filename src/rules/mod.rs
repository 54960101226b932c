//! Rule configuration model and parsing facade.
//!
//! This module defines the typed rule set produced by the engine and the
//! [`RuleParser`] facade that builds it from a raw configuration value under
//! an explicit strict/lenient failure policy.

mod model;
mod parser;
mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use model::{
    ActionCosts, DisplayNames, MapRules, ParsedGameRules, PlayerRules, RestModeRules,
};
pub use parser::RuleParser;
pub use types::{DeathItemDisposition, ParseMode};
