//! Command implementations for rulebook.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

use std::path::Path;

use serde_json::Value;

use crate::cli::{CheckArgs, Command};
use crate::error::{Result, RulebookError};
use crate::rules::{ParseMode, RuleParser};
use crate::validate::validate;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Check(args) => cmd_check(args),
    }
}

fn cmd_check(args: CheckArgs) -> Result<()> {
    let raw = load_rules_value(&args.file)?;

    if !args.lenient {
        let report = validate(&raw);
        if !report.is_valid() {
            eprint!("{}", report.format_errors());
            return Err(RulebookError::InvalidRules {
                errors: report.errors,
                missing_sections: report.missing_sections,
            });
        }
    }

    let mode = if args.lenient {
        ParseMode::Lenient
    } else {
        ParseMode::Strict
    };
    let rules = RuleParser::new(mode).parse(&raw)?;

    for missing in &rules.missing_sections {
        eprintln!("warning: missing section '{missing}'");
    }
    for issue in &rules.parsing_issues {
        eprintln!("warning: {issue}");
    }

    if args.json {
        let rendered = serde_json::to_string_pretty(&rules).map_err(|e| {
            RulebookError::UserError(format!("failed to render rules as JSON: {}", e))
        })?;
        println!("{rendered}");
    } else {
        let items = &rules.items.items;
        let item_count = items.weapons.len()
            + items.armors.len()
            + items.utilities.len()
            + items.consumables.len()
            + items.upgraders.len();
        println!(
            "ok: {} places ({} safe), {} rarity levels, {} items, {} upgrade recipe keys, {} issue(s)",
            rules.map.places.len(),
            rules.map.safe_places.len(),
            rules.items.rarity_levels.len(),
            item_count,
            rules.items.upgrade_recipes.len(),
            rules.parsing_issues.len(),
        );
    }

    Ok(())
}

/// Load a rules file into a raw value.
///
/// Files with a `.json` extension parse as JSON; everything else as YAML
/// (which also accepts JSON, but with less precise error positions).
fn load_rules_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        RulebookError::UserError(format!(
            "failed to read rules file '{}': {}",
            path.display(),
            e
        ))
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(&content).map_err(|e| {
            RulebookError::UserError(format!(
                "failed to parse rules file '{}' as JSON: {}",
                path.display(),
                e
            ))
        })
    } else {
        serde_yaml::from_str(&content).map_err(|e| {
            RulebookError::UserError(format!(
                "failed to parse rules file '{}' as YAML: {}",
                path.display(),
                e
            ))
        })
    }
}
