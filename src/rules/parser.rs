//! Parsing facade: validate -> normalize -> duplicate-scan -> assemble.
//!
//! The facade owns the failure policy. Strict mode rejects an invalid
//! configuration outright, carrying every defect; lenient mode never rejects,
//! demoting each defect into a recorded parsing issue and substituting the
//! documented defaults. Construct one explicitly where the application is
//! wired together; there is no shared global instance.

use serde_json::{Map, Value};

use super::model::{
    ActionCosts, DisplayNames, MapRules, ParsedGameRules, PlayerRules, RestModeRules,
};
use super::types::{DeathItemDisposition, ParseMode};
use crate::behavior::TeammateBehaviors;
use crate::error::{Result, RulebookError};
use crate::items::{find_duplicate_names, normalize_items};
use crate::validate::validate;

/// Rule configuration parser.
#[derive(Debug, Clone, Copy)]
pub struct RuleParser {
    mode: ParseMode,
}

impl RuleParser {
    /// Create a parser with the given failure policy.
    pub fn new(mode: ParseMode) -> Self {
        Self { mode }
    }

    /// The parser's failure policy.
    pub fn mode(&self) -> ParseMode {
        self.mode
    }

    /// Parse a raw rules configuration into the typed rule set.
    ///
    /// Pure and stateless: the same input always yields the same result, and
    /// nothing carries over between calls.
    ///
    /// # Returns
    ///
    /// * `Ok(ParsedGameRules)` - the typed rule set; `parsing_issues` and
    ///   `missing_sections` report non-fatal findings
    /// * `Err(RulebookError::InvalidRules)` - strict mode only, carrying the
    ///   complete error list and missing sections
    pub fn parse(&self, raw_config: &Value) -> Result<ParsedGameRules> {
        log::debug!("parsing rules configuration in {:?} mode", self.mode);

        let report = validate(raw_config);
        let mut parsing_issues = Vec::new();

        match self.mode {
            ParseMode::Strict => {
                if !report.is_valid() {
                    return Err(RulebookError::InvalidRules {
                        errors: report.errors,
                        missing_sections: report.missing_sections,
                    });
                }
            }
            ParseMode::Lenient => {
                // Defects become recorded substitutions instead of failures.
                parsing_issues.extend(report.errors);
            }
        }

        let empty = Map::new();
        let root = raw_config.as_object().unwrap_or(&empty);

        let items_result = normalize_items(root.get("items_config").unwrap_or(&Value::Null));
        parsing_issues.extend(items_result.issues);

        let duplicates = find_duplicate_names(&items_result.config);
        if !duplicates.is_empty() {
            log::warn!("duplicate item names in rules configuration: {}", duplicates.join(", "));
            parsing_issues.push(format!("duplicate item names: {}", duplicates.join(", ")));
        }

        let teammate_behavior = root
            .get("teammate_behavior")
            .and_then(Value::as_u64)
            .and_then(|v| u32::try_from(v).ok())
            .unwrap_or(0);

        let death_item_disposition = root
            .get("death_item_disposition")
            .and_then(Value::as_str)
            .and_then(DeathItemDisposition::from_str)
            .unwrap_or_default();

        Ok(ParsedGameRules {
            map: MapRules::from_raw(root.get("map")),
            player: PlayerRules::from_raw(root.get("player")),
            action_costs: ActionCosts::from_raw(root.get("action_costs")),
            rest_mode: RestModeRules::from_raw(root.get("rest_mode")),
            death_item_disposition,
            teammate_behavior,
            teammate_behaviors: TeammateBehaviors::decode(teammate_behavior),
            items: items_result.config,
            display_names: DisplayNames::from_raw(root.get("display_names")),
            parsing_issues,
            missing_sections: report.missing_sections,
        })
    }
}

impl Default for RuleParser {
    /// Strict parser; the safest policy is the default one.
    fn default() -> Self {
        Self::new(ParseMode::Strict)
    }
}
