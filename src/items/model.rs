//! Typed item configuration structs.
//!
//! Field names match the wire format. Optional properties are emitted only
//! when they were present and well-typed in the input, so serialized output
//! never fabricates a field the operator did not write.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A named rarity grade controlling drop pools and airdrop eligibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RarityLevel {
    pub internal_name: String,
    pub display_name: String,
    /// Prefix prepended to item labels of this rarity.
    pub prefix: String,
    pub is_airdropped: bool,
}

/// Weapon combat properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponProperties {
    pub damage: i32,
    pub votes: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uses: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aoe_damage: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bleed_damage: Option<i32>,
}

/// A weapon entry: one internal name, one or more display names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponConfig {
    pub internal_name: String,
    pub display_names: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity: Option<String>,
    pub properties: WeaponProperties,
}

/// Armor defensive properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmorProperties {
    pub defense: i32,
    pub votes: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uses: Option<i32>,
}

/// An armor entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmorConfig {
    pub internal_name: String,
    pub display_names: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity: Option<String>,
    pub properties: ArmorProperties,
}

/// Properties of a utility item (traps, locators, and similar tools).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtilityProperties {
    /// Utility sub-category tag.
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub votes: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uses: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targets: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage: Option<i32>,
    /// Per-night use limit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uses_night: Option<i32>,
}

/// A utility entry, identified by a single display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtilityConfig {
    pub name: String,
    pub properties: UtilityProperties,
}

/// Properties of a consumable item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumableProperties {
    pub effect_type: String,
    pub effect_value: i32,
    /// Bleed-cure level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cure_bleed: Option<i32>,
}

/// A consumable entry, identified by a single display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumableConfig {
    pub name: String,
    pub properties: ConsumableProperties,
}

/// An upgrader entry: display names only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgraderConfig {
    pub internal_name: String,
    pub display_names: Vec<String>,
}

/// One upgrade recipe: the item it produces and the ordered ingredient list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradeRecipe {
    pub result: String,
    pub ingredients: Vec<String>,
}

/// The five item category collections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemsByCategory {
    pub weapons: Vec<WeaponConfig>,
    pub armors: Vec<ArmorConfig>,
    pub utilities: Vec<UtilityConfig>,
    pub consumables: Vec<ConsumableConfig>,
    pub upgraders: Vec<UpgraderConfig>,
}

/// Fully-typed items configuration.
///
/// Recipes live in a sorted map so serialized output is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedItemsConfig {
    pub rarity_levels: Vec<RarityLevel>,
    pub items: ItemsByCategory,
    pub upgrade_recipes: BTreeMap<String, Vec<UpgradeRecipe>>,
}
