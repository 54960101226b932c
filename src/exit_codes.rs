//! Exit code constants for the rulebook CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable or malformed input file)
//! - 2: Validation failure (rules configuration rejected in strict mode)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable file, or malformed JSON/YAML.
pub const USER_ERROR: i32 = 1;

/// Validation failure: the rules configuration violates one or more invariants.
pub const VALIDATION_FAILURE: i32 = 2;
