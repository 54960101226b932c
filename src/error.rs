//! Error types for the rulebook CLI and engine.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for rulebook operations.
///
/// Each variant maps to a specific exit code. Strict-mode rejection carries
/// the complete defect list, never just the first finding.
#[derive(Error, Debug)]
pub enum RulebookError {
    /// User provided invalid arguments, an unreadable file, or malformed JSON/YAML.
    #[error("{0}")]
    UserError(String),

    /// A rules configuration was rejected by strict validation.
    #[error("invalid rules configuration: {} error(s)", .errors.len())]
    InvalidRules {
        /// Every structural, referential, and domain defect found.
        errors: Vec<String>,
        /// Required top-level sections absent from the input.
        missing_sections: Vec<String>,
    },
}

impl RulebookError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            RulebookError::UserError(_) => exit_codes::USER_ERROR,
            RulebookError::InvalidRules { .. } => exit_codes::VALIDATION_FAILURE,
        }
    }
}

/// Result type alias for rulebook operations.
pub type Result<T> = std::result::Result<T, RulebookError>;
