//! Tests for the parsing facade.

use serde_json::{Value, json};

use super::*;
use crate::behavior::TeammateBehaviors;
use crate::error::RulebookError;
use crate::test_support::sample_config;

fn strict() -> RuleParser {
    RuleParser::new(ParseMode::Strict)
}

fn lenient() -> RuleParser {
    RuleParser::new(ParseMode::Lenient)
}

#[test]
fn strict_parse_of_valid_config_succeeds() {
    let rules = strict().parse(&sample_config()).unwrap();

    assert_eq!(rules.map.places, vec!["Forest", "Beach", "Cave", "Clinic"]);
    assert_eq!(rules.map.safe_places, vec!["Clinic"]);
    assert_eq!(rules.player.max_life, 100);
    assert_eq!(rules.action_costs.deliver, 105);
    assert_eq!(rules.rest_mode.strength_recovery, 1000);
    assert_eq!(rules.death_item_disposition, DeathItemDisposition::KillerTakesLoot);
    assert_eq!(rules.teammate_behavior, 5);
    assert_eq!(rules.teammate_behaviors, TeammateBehaviors::decode(5));
    assert!(rules.teammate_behaviors.no_harm);
    assert!(rules.teammate_behaviors.can_view_status);
    assert_eq!(rules.items.items.weapons.len(), 2);
    assert!(rules.parsing_issues.is_empty());
    assert!(rules.missing_sections.is_empty());
}

#[test]
fn display_names_merge_over_defaults() {
    let rules = strict().parse(&sample_config()).unwrap();
    // Provided labels win; absent ones keep their defaults.
    assert_eq!(rules.display_names.player_max_life, "Life");
    assert_eq!(rules.display_names.action_attack, "Attack");
    assert_eq!(rules.display_names.action_deliver, "Deliver");
}

#[test]
fn strict_parse_rejects_invalid_config_with_full_error_list() {
    let mut config = sample_config();
    config.as_object_mut().unwrap().remove("map");
    config["death_item_disposition"] = json!("explode");

    let err = strict().parse(&config).unwrap_err();
    match err {
        RulebookError::InvalidRules {
            errors,
            missing_sections,
        } => {
            assert!(errors.len() >= 2);
            assert!(errors.iter().any(|e| e.contains("map")));
            assert!(errors.iter().any(|e| e.contains("death_item_disposition")));
            assert_eq!(missing_sections, vec!["map"]);
        }
        other => panic!("expected InvalidRules, got {other:?}"),
    }
}

#[test]
fn duplicate_names_never_block_strict_parsing() {
    let mut config = sample_config();
    // A consumable colliding with a weapon display name is structurally valid.
    config["items_config"]["items"]["consumables"]
        .as_array_mut()
        .unwrap()
        .push(json!({
            "name": "Iron Sword",
            "properties": { "effect_type": "heal", "effect_value": 1 }
        }));

    let rules = strict().parse(&config).unwrap();
    assert!(
        rules
            .parsing_issues
            .iter()
            .any(|i| i.contains("duplicate item names") && i.contains("Iron Sword"))
    );
}

#[test]
fn lenient_parse_never_fails() {
    for input in [Value::Null, json!(42), json!({}), json!([])] {
        let rules = lenient().parse(&input).unwrap();
        assert_eq!(rules.player, PlayerRules::default());
        assert_eq!(rules.action_costs, ActionCosts::default());
        assert_eq!(rules.rest_mode, RestModeRules::default());
        assert_eq!(rules.death_item_disposition, DeathItemDisposition::KillerTakesLoot);
        assert_eq!(rules.teammate_behavior, 0);
        assert!(!rules.parsing_issues.is_empty());
    }
}

#[test]
fn lenient_parse_of_non_object_marks_root() {
    let rules = lenient().parse(&Value::Null).unwrap();
    assert_eq!(rules.missing_sections, vec!["root"]);
}

#[test]
fn lenient_parse_of_empty_object_reports_every_section() {
    let rules = lenient().parse(&json!({})).unwrap();
    assert_eq!(rules.missing_sections.len(), 8);
    assert!(rules.missing_sections.iter().any(|s| s == "items_config"));
}

#[test]
fn lenient_parse_substitutes_defaults_for_mistyped_fields() {
    let mut config = sample_config();
    config["player"]["max_life"] = json!("a lot");
    config["death_item_disposition"] = json!("explode");
    config["teammate_behavior"] = json!(-3);

    let rules = lenient().parse(&config).unwrap();
    assert_eq!(rules.player.max_life, 100);
    assert_eq!(rules.death_item_disposition, DeathItemDisposition::KillerTakesLoot);
    assert_eq!(rules.teammate_behavior, 0);
    assert_eq!(rules.teammate_behaviors, TeammateBehaviors::default());
    // Each demoted defect is visible to the caller.
    assert!(rules.parsing_issues.iter().any(|i| i.contains("player.max_life")));
    assert!(rules.parsing_issues.iter().any(|i| i.contains("death_item_disposition")));
    assert!(rules.parsing_issues.iter().any(|i| i.contains("teammate_behavior")));
}

#[test]
fn lenient_parse_keeps_well_typed_values() {
    let mut config = sample_config();
    config.as_object_mut().unwrap().remove("rest_mode");
    let rules = lenient().parse(&config).unwrap();
    // Missing section defaults, intact sections parse normally.
    assert_eq!(rules.rest_mode, RestModeRules::default());
    assert_eq!(rules.player.max_strength, 100);
    assert_eq!(rules.items.items.consumables.len(), 2);
    assert_eq!(rules.missing_sections, vec!["rest_mode"]);
}

#[test]
fn parsing_is_idempotent() {
    let config = sample_config();
    assert_eq!(
        strict().parse(&config).unwrap(),
        strict().parse(&config).unwrap()
    );

    let broken = json!({ "player": { "max_life": "oops" } });
    assert_eq!(
        lenient().parse(&broken).unwrap(),
        lenient().parse(&broken).unwrap()
    );
}

#[test]
fn parse_does_not_mutate_its_input() {
    let config = sample_config();
    let before = config.clone();
    let _ = strict().parse(&config).unwrap();
    let _ = lenient().parse(&config).unwrap();
    assert_eq!(config, before);
}

#[test]
fn default_parser_is_strict() {
    assert_eq!(RuleParser::default().mode(), ParseMode::Strict);
}

#[test]
fn parse_mode_from_str() {
    assert_eq!(ParseMode::from_str("strict"), Some(ParseMode::Strict));
    assert_eq!(ParseMode::from_str("lenient"), Some(ParseMode::Lenient));
    assert_eq!(ParseMode::from_str("forgiving"), None);
}

#[test]
fn disposition_round_trips_through_wire_spelling() {
    for disposition in [
        DeathItemDisposition::KillerTakesLoot,
        DeathItemDisposition::DropToGround,
        DeathItemDisposition::VanishCompletely,
    ] {
        assert_eq!(
            DeathItemDisposition::from_str(disposition.as_str()),
            Some(disposition)
        );
    }
    assert_eq!(DeathItemDisposition::from_str("explode"), None);
}

#[test]
fn parsed_rules_serialize_with_wire_field_names() {
    let rules = strict().parse(&sample_config()).unwrap();
    let rendered = serde_json::to_value(&rules).unwrap();
    assert_eq!(rendered["action_costs"]["move"], 5);
    assert_eq!(rendered["action_costs"]["use"], 0);
    assert_eq!(rendered["action_costs"]["throw"], 0);
    assert_eq!(rendered["death_item_disposition"], "killer_takes_loot");
}
