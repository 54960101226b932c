//! Typed rule sections and the assembled parse result.
//!
//! Every section knows its default values and how to build itself from a raw
//! section object; absent or mistyped fields fall back to the defaults. The
//! defaults are the engine's documented baseline rule set.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::types::DeathItemDisposition;
use crate::behavior::TeammateBehaviors;
use crate::items::NormalizedItemsConfig;
use crate::raw;

/// Map layout: declared places and the safe subset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapRules {
    pub places: Vec<String>,
    pub safe_places: Vec<String>,
}

impl MapRules {
    pub(crate) fn from_raw(section: Option<&Value>) -> Self {
        let Some(section) = section.and_then(Value::as_object) else {
            return Self::default();
        };
        Self {
            places: section.get("places").map(raw::string_array).unwrap_or_default(),
            safe_places: section
                .get("safe_places")
                .map(raw::string_array)
                .unwrap_or_default(),
        }
    }
}

/// Player stat caps and recovery rates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRules {
    pub max_life: i32,
    pub max_strength: i32,
    pub daily_life_recovery: i32,
    pub daily_strength_recovery: i32,
    pub search_cooldown: i32,
    pub max_backpack_items: i32,
    pub unarmed_damage: i32,
}

impl Default for PlayerRules {
    fn default() -> Self {
        Self {
            max_life: 100,
            max_strength: 100,
            daily_life_recovery: 0,
            daily_strength_recovery: 40,
            search_cooldown: 30,
            max_backpack_items: 4,
            unarmed_damage: 5,
        }
    }
}

impl PlayerRules {
    pub(crate) fn from_raw(section: Option<&Value>) -> Self {
        let defaults = Self::default();
        let Some(section) = section.and_then(Value::as_object) else {
            return defaults;
        };
        Self {
            max_life: raw::i32_or(section, "max_life", defaults.max_life),
            max_strength: raw::i32_or(section, "max_strength", defaults.max_strength),
            daily_life_recovery: raw::i32_or(
                section,
                "daily_life_recovery",
                defaults.daily_life_recovery,
            ),
            daily_strength_recovery: raw::i32_or(
                section,
                "daily_strength_recovery",
                defaults.daily_strength_recovery,
            ),
            search_cooldown: raw::i32_or(section, "search_cooldown", defaults.search_cooldown),
            max_backpack_items: raw::i32_or(
                section,
                "max_backpack_items",
                defaults.max_backpack_items,
            ),
            unarmed_damage: raw::i32_or(section, "unarmed_damage", defaults.unarmed_damage),
        }
    }
}

/// Strength cost of each player action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionCosts {
    #[serde(rename = "move")]
    pub move_cost: i32,
    pub search: i32,
    pub pick: i32,
    pub attack: i32,
    pub equip: i32,
    #[serde(rename = "use")]
    pub use_item: i32,
    #[serde(rename = "throw")]
    pub throw_item: i32,
    pub deliver: i32,
}

impl Default for ActionCosts {
    fn default() -> Self {
        Self {
            move_cost: 5,
            search: 5,
            pick: 0,
            attack: 0,
            equip: 0,
            use_item: 0,
            throw_item: 0,
            deliver: 105,
        }
    }
}

impl ActionCosts {
    pub(crate) fn from_raw(section: Option<&Value>) -> Self {
        let defaults = Self::default();
        let Some(section) = section.and_then(Value::as_object) else {
            return defaults;
        };
        Self {
            move_cost: raw::i32_or(section, "move", defaults.move_cost),
            search: raw::i32_or(section, "search", defaults.search),
            pick: raw::i32_or(section, "pick", defaults.pick),
            attack: raw::i32_or(section, "attack", defaults.attack),
            equip: raw::i32_or(section, "equip", defaults.equip),
            use_item: raw::i32_or(section, "use", defaults.use_item),
            throw_item: raw::i32_or(section, "throw", defaults.throw_item),
            deliver: raw::i32_or(section, "deliver", defaults.deliver),
        }
    }
}

/// Recovery rules while a player is resting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestModeRules {
    pub life_recovery: i32,
    pub strength_recovery: i32,
    pub max_moves: i32,
}

impl Default for RestModeRules {
    fn default() -> Self {
        Self {
            life_recovery: 25,
            strength_recovery: 1000,
            max_moves: 1,
        }
    }
}

impl RestModeRules {
    pub(crate) fn from_raw(section: Option<&Value>) -> Self {
        let defaults = Self::default();
        let Some(section) = section.and_then(Value::as_object) else {
            return defaults;
        };
        Self {
            life_recovery: raw::i32_or(section, "life_recovery", defaults.life_recovery),
            strength_recovery: raw::i32_or(
                section,
                "strength_recovery",
                defaults.strength_recovery,
            ),
            max_moves: raw::i32_or(section, "max_moves", defaults.max_moves),
        }
    }
}

/// Operator-facing labels for rule fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayNames {
    pub player_max_life: String,
    pub player_max_strength: String,
    pub player_daily_life_recovery: String,
    pub player_daily_strength_recovery: String,
    pub player_search_cooldown: String,
    pub action_move: String,
    pub action_search: String,
    pub action_pick: String,
    pub action_attack: String,
    pub action_equip: String,
    pub action_use: String,
    pub action_throw: String,
    pub action_deliver: String,
    pub player_unarmed_damage: String,
    pub rest_life_recovery: String,
    pub rest_max_moves: String,
}

impl Default for DisplayNames {
    fn default() -> Self {
        Self {
            player_max_life: "Life".to_string(),
            player_max_strength: "Strength".to_string(),
            player_daily_life_recovery: "Daily life recovery".to_string(),
            player_daily_strength_recovery: "Daily strength recovery".to_string(),
            player_search_cooldown: "Search cooldown".to_string(),
            action_move: "Move".to_string(),
            action_search: "Search".to_string(),
            action_pick: "Pick up".to_string(),
            action_attack: "Attack".to_string(),
            action_equip: "Equip".to_string(),
            action_use: "Use".to_string(),
            action_throw: "Discard".to_string(),
            action_deliver: "Deliver".to_string(),
            player_unarmed_damage: "Unarmed damage".to_string(),
            rest_life_recovery: "Life recovery".to_string(),
            rest_max_moves: "Max moves".to_string(),
        }
    }
}

impl DisplayNames {
    pub(crate) fn from_raw(section: Option<&Value>) -> Self {
        let defaults = Self::default();
        let Some(section) = section.and_then(Value::as_object) else {
            return defaults;
        };
        let label = |key: &str, fallback: &str| label_or(section, key, fallback);
        Self {
            player_max_life: label("player_max_life", &defaults.player_max_life),
            player_max_strength: label("player_max_strength", &defaults.player_max_strength),
            player_daily_life_recovery: label(
                "player_daily_life_recovery",
                &defaults.player_daily_life_recovery,
            ),
            player_daily_strength_recovery: label(
                "player_daily_strength_recovery",
                &defaults.player_daily_strength_recovery,
            ),
            player_search_cooldown: label("player_search_cooldown", &defaults.player_search_cooldown),
            action_move: label("action_move", &defaults.action_move),
            action_search: label("action_search", &defaults.action_search),
            action_pick: label("action_pick", &defaults.action_pick),
            action_attack: label("action_attack", &defaults.action_attack),
            action_equip: label("action_equip", &defaults.action_equip),
            action_use: label("action_use", &defaults.action_use),
            action_throw: label("action_throw", &defaults.action_throw),
            action_deliver: label("action_deliver", &defaults.action_deliver),
            player_unarmed_damage: label("player_unarmed_damage", &defaults.player_unarmed_damage),
            rest_life_recovery: label("rest_life_recovery", &defaults.rest_life_recovery),
            rest_max_moves: label("rest_max_moves", &defaults.rest_max_moves),
        }
    }
}

/// Empty labels fall back like missing ones; a blank label is never useful.
fn label_or(section: &Map<String, Value>, key: &str, fallback: &str) -> String {
    match section.get(key).and_then(raw::non_empty_str) {
        Some(s) => s.to_string(),
        None => fallback.to_string(),
    }
}

/// The engine's output: a fully-typed, default-completed rule set.
///
/// Constructed fresh on every parse and treated as immutable afterwards.
/// `parsing_issues` and `missing_sections` are always present, possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedGameRules {
    pub map: MapRules,
    pub player: PlayerRules,
    pub action_costs: ActionCosts,
    pub rest_mode: RestModeRules,
    pub death_item_disposition: DeathItemDisposition,
    pub teammate_behavior: u32,
    pub teammate_behaviors: TeammateBehaviors,
    pub items: NormalizedItemsConfig,
    pub display_names: DisplayNames,
    pub parsing_issues: Vec<String>,
    pub missing_sections: Vec<String>,
}
