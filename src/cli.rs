//! CLI argument parsing for rulebook.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rulebook: validation and normalization engine for game-session rule
/// configurations.
///
/// Rule files are operator-authored JSON or YAML; `check` validates them
/// against the engine's structural and cross-referential invariants and can
/// print the normalized, default-completed rule set.
#[derive(Parser, Debug)]
#[command(name = "rulebook")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for rulebook.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate and normalize a rules configuration file.
    ///
    /// In strict mode (the default) any defect rejects the file with a full
    /// error listing. With --lenient every defect becomes a warning and the
    /// documented defaults fill the gaps.
    Check(CheckArgs),
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Path to the rules file (.json parses as JSON, anything else as YAML).
    pub file: PathBuf,

    /// Parse leniently: substitute defaults and report defects as warnings.
    #[arg(long)]
    pub lenient: bool,

    /// Print the normalized rule set as pretty JSON.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        // Verifies the CLI arguments configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_check_minimal() {
        let cli = Cli::try_parse_from(["rulebook", "check", "rules.json"]).unwrap();
        let Command::Check(args) = cli.command;
        assert_eq!(args.file, PathBuf::from("rules.json"));
        assert!(!args.lenient);
        assert!(!args.json);
    }

    #[test]
    fn parse_check_full() {
        let cli =
            Cli::try_parse_from(["rulebook", "check", "rules.yaml", "--lenient", "--json"])
                .unwrap();
        let Command::Check(args) = cli.command;
        assert_eq!(args.file, PathBuf::from("rules.yaml"));
        assert!(args.lenient);
        assert!(args.json);
    }

    #[test]
    fn check_requires_a_file() {
        assert!(Cli::try_parse_from(["rulebook", "check"]).is_err());
    }
}
