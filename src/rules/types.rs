//! Rule enums shared by the validator and the parsing facade.

use serde::{Deserialize, Serialize};

/// What happens to a defeated player's inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeathItemDisposition {
    /// Awarded to the killer (default).
    #[default]
    KillerTakesLoot,
    /// Dropped where the player fell.
    DropToGround,
    /// Removed from the session entirely.
    VanishCompletely,
}

impl DeathItemDisposition {
    /// Wire spellings of the allowed values, for error messages.
    pub const ALLOWED: [&'static str; 3] =
        ["killer_takes_loot", "drop_to_ground", "vanish_completely"];

    /// Parse a disposition from its wire spelling.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "killer_takes_loot" => Some(Self::KillerTakesLoot),
            "drop_to_ground" => Some(Self::DropToGround),
            "vanish_completely" => Some(Self::VanishCompletely),
            _ => None,
        }
    }

    /// Wire spelling of this disposition.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::KillerTakesLoot => "killer_takes_loot",
            Self::DropToGround => "drop_to_ground",
            Self::VanishCompletely => "vanish_completely",
        }
    }
}

/// Failure policy for the parsing facade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ParseMode {
    /// Reject the configuration on any validation error (default, safest).
    #[default]
    Strict,
    /// Never reject: substitute documented defaults and record every defect
    /// as a parsing issue.
    Lenient,
}

impl ParseMode {
    /// Parse a mode from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "strict" => Some(Self::Strict),
            "lenient" => Some(Self::Lenient),
            _ => None,
        }
    }
}
