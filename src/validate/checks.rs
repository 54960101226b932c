//! Field-level checks over raw rule configurations.
//!
//! Each section check is an independent function that appends zero or more
//! errors; [`validate`] folds them all into one report, so a single pass
//! surfaces every defect at once. Cross-field checks (place duplicates,
//! safe-place membership) run only when both operands are array-shaped.

use serde_json::{Map, Value};
use std::collections::HashSet;

use super::report::ValidationReport;
use crate::raw;
use crate::rules::DeathItemDisposition;

/// Top-level sections every configuration must carry.
pub const REQUIRED_SECTIONS: [&str; 8] = [
    "map",
    "player",
    "action_costs",
    "rest_mode",
    "teammate_behavior",
    "items_config",
    "display_names",
    "death_item_disposition",
];

type SectionCheck = fn(&Map<String, Value>, &mut ValidationReport);

const SECTION_CHECKS: [SectionCheck; 8] = [
    check_map,
    check_player,
    check_action_costs,
    check_rest_mode,
    check_death_item_disposition,
    check_teammate_behavior,
    check_items_config,
    check_display_names,
];

/// Validate a raw rules configuration.
///
/// Never short-circuits: missing sections and every field-level defect are
/// all collected. A non-object input yields a single structural error plus
/// the `root` missing-section marker.
pub fn validate(raw: &Value) -> ValidationReport {
    let mut report = ValidationReport::default();

    let Some(root) = raw.as_object() else {
        report.error("rules configuration must be an object");
        report.missing_sections.push("root".to_string());
        return report;
    };

    for section in REQUIRED_SECTIONS {
        if !root.contains_key(section) {
            report.missing_section(section);
        }
    }

    for check in SECTION_CHECKS {
        check(root, &mut report);
    }

    report
}

fn check_map(root: &Map<String, Value>, report: &mut ValidationReport) {
    let Some(map) = root.get("map") else {
        return;
    };
    let Some(map) = map.as_object() else {
        report.error("map must be an object");
        return;
    };

    let places = check_place_list(map, "places", report);
    let safe_places = check_place_list(map, "safe_places", report);

    // Referential check: only meaningful when both lists are array-shaped.
    if let (Some(places), Some(safe_places)) = (places, safe_places) {
        let declared: HashSet<&str> = places
            .iter()
            .filter_map(Value::as_str)
            .collect();
        for safe in safe_places.iter().filter_map(Value::as_str) {
            if !declared.contains(safe) {
                report.error(format!("safe place '{safe}' is not in the place list"));
            }
        }
    }
}

/// Check one place list: array of non-empty strings, no duplicate names.
fn check_place_list<'a>(
    map: &'a Map<String, Value>,
    key: &str,
    report: &mut ValidationReport,
) -> Option<&'a Vec<Value>> {
    let Some(Value::Array(list)) = map.get(key) else {
        report.error(format!("map.{key} must be an array"));
        return None;
    };

    let mut seen: HashSet<&str> = HashSet::new();
    for (index, entry) in list.iter().enumerate() {
        match raw::non_empty_str(entry) {
            Some(name) => {
                if !seen.insert(name) {
                    report.error(format!("map.{key} contains duplicate name '{name}'"));
                }
            }
            None => report.error(format!("map.{key}[{index}] must be a non-empty string")),
        }
    }

    Some(list)
}

fn check_player(root: &Map<String, Value>, report: &mut ValidationReport) {
    let Some(player) = root.get("player") else {
        return;
    };
    let Some(player) = player.as_object() else {
        report.error("player must be an object");
        return;
    };

    // Stat caps are mandatory; the remaining stats default when absent.
    for key in ["max_life", "max_strength"] {
        match player.get(key) {
            Some(value) if raw::is_finite_number(value) => {}
            _ => report.error(format!("player.{key} must be a number")),
        }
    }
    check_declared_numbers(
        player,
        &[
            "daily_life_recovery",
            "daily_strength_recovery",
            "search_cooldown",
            "max_backpack_items",
            "unarmed_damage",
        ],
        "player",
        report,
    );
}

fn check_action_costs(root: &Map<String, Value>, report: &mut ValidationReport) {
    let Some(costs) = root.get("action_costs") else {
        return;
    };
    let Some(costs) = costs.as_object() else {
        report.error("action_costs must be an object");
        return;
    };
    check_declared_numbers(
        costs,
        &[
            "move", "search", "pick", "attack", "equip", "use", "throw", "deliver",
        ],
        "action_costs",
        report,
    );
}

fn check_rest_mode(root: &Map<String, Value>, report: &mut ValidationReport) {
    let Some(rest) = root.get("rest_mode") else {
        return;
    };
    let Some(rest) = rest.as_object() else {
        report.error("rest_mode must be an object");
        return;
    };
    check_declared_numbers(
        rest,
        &["life_recovery", "strength_recovery", "max_moves"],
        "rest_mode",
        report,
    );
}

fn check_death_item_disposition(root: &Map<String, Value>, report: &mut ValidationReport) {
    let Some(value) = root.get("death_item_disposition") else {
        return;
    };
    match value.as_str() {
        None => report.error("death_item_disposition must be a string"),
        Some(s) => {
            if DeathItemDisposition::from_str(s).is_none() {
                report.error(format!(
                    "death_item_disposition '{s}' is invalid; allowed values: {}",
                    DeathItemDisposition::ALLOWED.join(", ")
                ));
            }
        }
    }
}

fn check_teammate_behavior(root: &Map<String, Value>, report: &mut ValidationReport) {
    let Some(value) = root.get("teammate_behavior") else {
        return;
    };
    match value {
        Value::Number(n) => match n.as_u64() {
            Some(v) if v <= u64::from(u32::MAX) => {}
            Some(_) => report.error("teammate_behavior is out of range"),
            None => report.error("teammate_behavior must be a non-negative integer"),
        },
        _ => report.error("teammate_behavior must be a non-negative integer"),
    }
}

fn check_items_config(root: &Map<String, Value>, report: &mut ValidationReport) {
    let Some(config) = root.get("items_config") else {
        return;
    };
    let Some(config) = config.as_object() else {
        report.error("items_config must be an object");
        return;
    };

    match config.get("rarity_levels") {
        Some(Value::Array(levels)) => {
            for (index, level) in levels.iter().enumerate() {
                let ctx = format!("items_config.rarity_levels[{index}]");
                let Some(level) = level.as_object() else {
                    report.error(format!("{ctx} must be an object"));
                    continue;
                };
                require_non_empty_string(level, "internal_name", &ctx, report);
                require_non_empty_string(level, "display_name", &ctx, report);
                if let Some(value) = level.get("is_airdropped")
                    && !value.is_boolean()
                {
                    report.error(format!("{ctx}: is_airdropped must be a boolean"));
                }
            }
        }
        _ => report.error("items_config.rarity_levels must be an array"),
    }

    if let Some(items) = config.get("items") {
        match items.as_object() {
            Some(items) => check_item_categories(items, report),
            None => report.error("items_config.items must be an object"),
        }
    }

    if let Some(recipes) = config.get("upgrade_recipes") {
        match recipes.as_object() {
            Some(recipes) => {
                for (key, value) in recipes {
                    if !value.is_array() {
                        report.error(format!("upgrade recipe '{key}' must be an array"));
                    }
                }
            }
            None => report.error("items_config.upgrade_recipes must be an object"),
        }
    }
}

fn check_item_categories(items: &Map<String, Value>, report: &mut ValidationReport) {
    for_each_entry(items, "weapons", report, |entry, ctx, report| {
        require_non_empty_string(entry, "internal_name", ctx, report);
        require_string_array(entry, "display_names", ctx, report);
        require_non_empty_string(entry, "rarity", ctx, report);
        with_properties(entry, ctx, report, |props, report| {
            require_numbers(props, &["damage", "votes"], ctx, report);
            check_declared_numbers(props, &["uses", "aoe_damage", "bleed_damage"], ctx, report);
        });
    });

    for_each_entry(items, "armors", report, |entry, ctx, report| {
        require_non_empty_string(entry, "internal_name", ctx, report);
        require_string_array(entry, "display_names", ctx, report);
        require_non_empty_string(entry, "rarity", ctx, report);
        with_properties(entry, ctx, report, |props, report| {
            require_numbers(props, &["defense", "votes"], ctx, report);
            check_declared_numbers(props, &["uses"], ctx, report);
        });
    });

    for_each_entry(items, "utilities", report, |entry, ctx, report| {
        require_non_empty_string(entry, "name", ctx, report);
        with_properties(entry, ctx, report, |props, report| {
            require_non_empty_string(props, "category", ctx, report);
            check_declared_numbers(
                props,
                &["votes", "uses", "targets", "damage", "uses_night"],
                ctx,
                report,
            );
        });
    });

    for_each_entry(items, "consumables", report, |entry, ctx, report| {
        require_non_empty_string(entry, "name", ctx, report);
        with_properties(entry, ctx, report, |props, report| {
            require_non_empty_string(props, "effect_type", ctx, report);
            require_numbers(props, &["effect_value"], ctx, report);
            check_declared_numbers(props, &["cure_bleed"], ctx, report);
        });
    });

    for_each_entry(items, "upgraders", report, |entry, ctx, report| {
        require_non_empty_string(entry, "internal_name", ctx, report);
        require_string_array(entry, "display_names", ctx, report);
    });
}

fn check_display_names(root: &Map<String, Value>, report: &mut ValidationReport) {
    let Some(names) = root.get("display_names") else {
        return;
    };
    let Some(names) = names.as_object() else {
        report.error("display_names must be an object");
        return;
    };
    for (key, value) in names {
        if !value.is_string() {
            report.error(format!("display_names.{key} must be a string"));
        }
    }
}

/// Run a per-entry check over one category array.
fn for_each_entry(
    items: &Map<String, Value>,
    category: &str,
    report: &mut ValidationReport,
    check: impl Fn(&Map<String, Value>, &str, &mut ValidationReport),
) {
    let Some(value) = items.get(category) else {
        return;
    };
    let Some(list) = value.as_array() else {
        report.error(format!("items_config.items.{category} must be an array"));
        return;
    };
    for (index, entry) in list.iter().enumerate() {
        let ctx = format!("items_config.items.{category}[{index}]");
        match entry.as_object() {
            Some(entry) => check(entry, &ctx, report),
            None => report.error(format!("{ctx} must be an object")),
        }
    }
}

fn with_properties(
    entry: &Map<String, Value>,
    ctx: &str,
    report: &mut ValidationReport,
    check: impl FnOnce(&Map<String, Value>, &mut ValidationReport),
) {
    match entry.get("properties").and_then(Value::as_object) {
        Some(props) => check(props, report),
        None => report.error(format!("{ctx}: properties must be an object")),
    }
}

fn require_non_empty_string(
    obj: &Map<String, Value>,
    key: &str,
    ctx: &str,
    report: &mut ValidationReport,
) {
    if obj.get(key).and_then(raw::non_empty_str).is_none() {
        report.error(format!("{ctx}: {key} must be a non-empty string"));
    }
}

fn require_string_array(
    obj: &Map<String, Value>,
    key: &str,
    ctx: &str,
    report: &mut ValidationReport,
) {
    match obj.get(key) {
        Some(Value::Array(entries)) => {
            for (index, entry) in entries.iter().enumerate() {
                if raw::non_empty_str(entry).is_none() {
                    report.error(format!("{ctx}: {key}[{index}] must be a non-empty string"));
                }
            }
        }
        _ => report.error(format!("{ctx}: {key} must be an array")),
    }
}

fn require_numbers(
    obj: &Map<String, Value>,
    keys: &[&str],
    ctx: &str,
    report: &mut ValidationReport,
) {
    for key in keys {
        match obj.get(*key) {
            Some(value) if raw::is_finite_number(value) => {}
            _ => report.error(format!("{ctx}: {key} must be a number")),
        }
    }
}

/// Type-check numeric fields that are optional within their section: absent
/// is fine, present-but-mistyped is a defect.
fn check_declared_numbers(
    obj: &Map<String, Value>,
    keys: &[&str],
    ctx: &str,
    report: &mut ValidationReport,
) {
    for key in keys {
        if let Some(value) = obj.get(*key)
            && !raw::is_finite_number(value)
        {
            report.error(format!("{ctx}.{key} must be a number"));
        }
    }
}
