//! Raw `items_config` -> typed configuration.
//!
//! Normalization never fails: mistyped required fields take a zero/empty
//! fallback with a recorded issue, optional fields are kept only when present
//! and well-typed, and malformed entries are skipped with an issue. Whether
//! issues are fatal is the facade's decision, not this module's.

use serde_json::{Map, Value};

use super::model::*;
use crate::raw;

/// Outcome of normalizing a raw `items_config` section.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemsParseResult {
    pub config: NormalizedItemsConfig,
    pub issues: Vec<String>,
}

/// Normalize the raw `items_config` value.
///
/// A missing or non-object section yields the empty configuration plus one
/// issue rather than an error.
pub fn normalize_items(raw_items_config: &Value) -> ItemsParseResult {
    let mut result = ItemsParseResult::default();

    let Some(section) = raw_items_config.as_object() else {
        result.issues.push("items_config must be an object".to_string());
        return result;
    };

    normalize_rarity_levels(section, &mut result);
    normalize_categories(section, &mut result);
    normalize_recipes(section, &mut result);

    result
}

fn normalize_rarity_levels(section: &Map<String, Value>, result: &mut ItemsParseResult) {
    match section.get("rarity_levels") {
        Some(Value::Array(levels)) => {
            for (index, level) in levels.iter().enumerate() {
                let Some(level) = level.as_object() else {
                    result
                        .issues
                        .push(format!("rarity_levels[{index}] must be an object, skipped"));
                    continue;
                };
                result.config.rarity_levels.push(RarityLevel {
                    internal_name: required_string(level, "internal_name", "rarity_levels", index, &mut result.issues),
                    display_name: required_string(level, "display_name", "rarity_levels", index, &mut result.issues),
                    prefix: raw::str_or(level, "prefix", ""),
                    is_airdropped: raw::bool_or(level, "is_airdropped", true),
                });
            }
        }
        Some(_) => result
            .issues
            .push("items_config.rarity_levels must be an array".to_string()),
        None => {}
    }
}

fn normalize_categories(section: &Map<String, Value>, result: &mut ItemsParseResult) {
    let Some(items) = section.get("items") else {
        return;
    };
    let Some(items) = items.as_object() else {
        result
            .issues
            .push("items_config.items must be an object".to_string());
        return;
    };

    for (index, weapon) in entries(items, "weapons", &mut result.issues) {
        result.config.items.weapons.push(normalize_weapon(weapon, index, &mut result.issues));
    }
    for (index, armor) in entries(items, "armors", &mut result.issues) {
        result.config.items.armors.push(normalize_armor(armor, index, &mut result.issues));
    }
    for (index, utility) in entries(items, "utilities", &mut result.issues) {
        result.config.items.utilities.push(normalize_utility(utility, index, &mut result.issues));
    }
    for (index, consumable) in entries(items, "consumables", &mut result.issues) {
        result
            .config
            .items
            .consumables
            .push(normalize_consumable(consumable, index, &mut result.issues));
    }
    for (index, upgrader) in entries(items, "upgraders", &mut result.issues) {
        result.config.items.upgraders.push(UpgraderConfig {
            internal_name: required_string(upgrader, "internal_name", "upgraders", index, &mut result.issues),
            display_names: display_names(upgrader),
        });
    }
}

fn normalize_weapon(weapon: &Map<String, Value>, index: usize, issues: &mut Vec<String>) -> WeaponConfig {
    let properties = raw::object_field(weapon, "properties");
    if properties.is_none() {
        issues.push(format!("weapons[{index}]: properties must be an object, using defaults"));
    }
    let empty = Map::new();
    let properties = properties.unwrap_or(&empty);

    WeaponConfig {
        internal_name: required_string(weapon, "internal_name", "weapons", index, issues),
        display_names: display_names(weapon),
        rarity: rarity_tag(weapon),
        properties: WeaponProperties {
            damage: required_i32(properties, "damage", "weapons", index, issues),
            votes: required_i32(properties, "votes", "weapons", index, issues),
            uses: raw::opt_i32(properties, "uses"),
            aoe_damage: raw::opt_i32(properties, "aoe_damage"),
            bleed_damage: raw::opt_i32(properties, "bleed_damage"),
        },
    }
}

fn normalize_armor(armor: &Map<String, Value>, index: usize, issues: &mut Vec<String>) -> ArmorConfig {
    let properties = raw::object_field(armor, "properties");
    if properties.is_none() {
        issues.push(format!("armors[{index}]: properties must be an object, using defaults"));
    }
    let empty = Map::new();
    let properties = properties.unwrap_or(&empty);

    ArmorConfig {
        internal_name: required_string(armor, "internal_name", "armors", index, issues),
        display_names: display_names(armor),
        rarity: rarity_tag(armor),
        properties: ArmorProperties {
            defense: required_i32(properties, "defense", "armors", index, issues),
            votes: required_i32(properties, "votes", "armors", index, issues),
            uses: raw::opt_i32(properties, "uses"),
        },
    }
}

fn normalize_utility(utility: &Map<String, Value>, index: usize, issues: &mut Vec<String>) -> UtilityConfig {
    let properties = raw::object_field(utility, "properties");
    if properties.is_none() {
        issues.push(format!("utilities[{index}]: properties must be an object, using defaults"));
    }
    let empty = Map::new();
    let properties = properties.unwrap_or(&empty);

    UtilityConfig {
        name: required_string(utility, "name", "utilities", index, issues),
        properties: UtilityProperties {
            category: required_string(properties, "category", "utilities", index, issues),
            votes: raw::opt_i32(properties, "votes"),
            uses: raw::opt_i32(properties, "uses"),
            targets: raw::opt_i32(properties, "targets"),
            damage: raw::opt_i32(properties, "damage"),
            uses_night: raw::opt_i32(properties, "uses_night"),
        },
    }
}

fn normalize_consumable(
    consumable: &Map<String, Value>,
    index: usize,
    issues: &mut Vec<String>,
) -> ConsumableConfig {
    let properties = raw::object_field(consumable, "properties");
    if properties.is_none() {
        issues.push(format!(
            "consumables[{index}]: properties must be an object, using defaults"
        ));
    }
    let empty = Map::new();
    let properties = properties.unwrap_or(&empty);

    ConsumableConfig {
        name: required_string(consumable, "name", "consumables", index, issues),
        properties: ConsumableProperties {
            effect_type: required_string(properties, "effect_type", "consumables", index, issues),
            effect_value: required_i32(properties, "effect_value", "consumables", index, issues),
            cure_bleed: raw::opt_i32(properties, "cure_bleed"),
        },
    }
}

fn normalize_recipes(section: &Map<String, Value>, result: &mut ItemsParseResult) {
    match section.get("upgrade_recipes") {
        Some(Value::Object(recipes)) => {
            for (key, value) in recipes {
                let Some(recipes) = value.as_array() else {
                    result
                        .issues
                        .push(format!("upgrade recipe '{key}' must be an array, skipped"));
                    continue;
                };
                let normalized = recipes
                    .iter()
                    .map(|recipe| {
                        let empty = Map::new();
                        let recipe = recipe.as_object().unwrap_or(&empty);
                        UpgradeRecipe {
                            result: raw::str_or(recipe, "result", ""),
                            ingredients: recipe
                                .get("ingredients")
                                .map(raw::string_array)
                                .unwrap_or_default(),
                        }
                    })
                    .collect();
                result.config.upgrade_recipes.insert(key.clone(), normalized);
            }
        }
        Some(_) => result
            .issues
            .push("items_config.upgrade_recipes must be an object".to_string()),
        None => {}
    }
}

/// Iterate a category array, rejecting non-object entries with an issue.
///
/// A present-but-not-array category records one issue; an absent category is
/// simply empty.
fn entries<'a>(
    items: &'a Map<String, Value>,
    category: &'static str,
    issues: &mut Vec<String>,
) -> Vec<(usize, &'a Map<String, Value>)> {
    match items.get(category) {
        Some(Value::Array(list)) => list
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| match entry.as_object() {
                Some(entry) => Some((index, entry)),
                None => {
                    issues.push(format!("{category}[{index}] must be an object, skipped"));
                    None
                }
            })
            .collect(),
        Some(_) => {
            issues.push(format!("items_config.items.{category} must be an array"));
            Vec::new()
        }
        None => Vec::new(),
    }
}

fn display_names(entry: &Map<String, Value>) -> Vec<String> {
    entry
        .get("display_names")
        .map(raw::string_array)
        .unwrap_or_default()
}

fn rarity_tag(entry: &Map<String, Value>) -> Option<String> {
    entry
        .get("rarity")
        .and_then(raw::non_empty_str)
        .map(str::to_string)
}

fn required_string(
    obj: &Map<String, Value>,
    key: &str,
    category: &str,
    index: usize,
    issues: &mut Vec<String>,
) -> String {
    match obj.get(key).and_then(Value::as_str) {
        Some(s) => s.to_string(),
        None => {
            issues.push(format!("{category}[{index}]: {key} must be a string, using \"\""));
            String::new()
        }
    }
}

fn required_i32(
    obj: &Map<String, Value>,
    key: &str,
    category: &str,
    index: usize,
    issues: &mut Vec<String>,
) -> i32 {
    match raw::opt_i32(obj, key) {
        Some(n) => n,
        None => {
            issues.push(format!("{category}[{index}]: {key} must be a number, using 0"));
            0
        }
    }
}
