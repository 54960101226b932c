//! Drop-pool catalog over a normalized items configuration.
//!
//! The catalog answers the questions the session director asks when placing
//! items: what exists, what belongs to which rarity, which rarities can still
//! be airdropped, and which concrete names a batch airdrop should use. It
//! holds the "already on the field" name set as explicit state; callers
//! refresh it via [`ItemCatalog::set_existing_items`] before each use rather
//! than relying on any implicit cache.

use std::collections::{BTreeMap, HashSet};

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::model::{NormalizedItemsConfig, RarityLevel};

/// Which pool an airdrop option draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AirdropItemType {
    Weapon,
    Armor,
}

impl AirdropItemType {
    fn key_prefix(&self) -> &'static str {
        match self {
            AirdropItemType::Weapon => "weapon",
            AirdropItemType::Armor => "armor",
        }
    }

    fn label_noun(&self) -> &'static str {
        match self {
            AirdropItemType::Weapon => "weapons",
            AirdropItemType::Armor => "armors",
        }
    }
}

/// One selectable rarity pool for a batch airdrop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RarityOption {
    /// Selection key, `weapon_<rarity>` or `armor_<rarity>`.
    pub key: String,
    /// Operator-facing label with the available count.
    pub label: String,
    pub item_type: AirdropItemType,
    /// Names of this pool not yet on the field.
    pub available: usize,
    /// Total names in this pool.
    pub max: usize,
}

/// Outcome of a random pick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickResult {
    pub selected: Vec<String>,
    /// True when fewer names were available than requested.
    pub insufficient: bool,
}

/// Precomputed item pools plus the on-field name filter.
#[derive(Debug, Clone)]
pub struct ItemCatalog {
    rarity_levels: Vec<RarityLevel>,
    weapons_by_rarity: BTreeMap<String, Vec<String>>,
    armors_by_rarity: BTreeMap<String, Vec<String>>,
    all_items: Vec<String>,
    existing: HashSet<String>,
}

impl ItemCatalog {
    /// Build the pools from a normalized configuration.
    ///
    /// `existing_items` are display names already placed on the field; they
    /// stay selectable state, not configuration, and can be refreshed later.
    pub fn new(config: &NormalizedItemsConfig, existing_items: &[String]) -> Self {
        let mut weapons_by_rarity: BTreeMap<String, Vec<String>> = BTreeMap::new();
        let mut armors_by_rarity: BTreeMap<String, Vec<String>> = BTreeMap::new();
        let mut all_items = Vec::new();

        for weapon in &config.items.weapons {
            if let Some(rarity) = &weapon.rarity {
                weapons_by_rarity
                    .entry(rarity.clone())
                    .or_default()
                    .extend(weapon.display_names.iter().cloned());
            }
            all_items.extend(weapon.display_names.iter().cloned());
        }
        for armor in &config.items.armors {
            if let Some(rarity) = &armor.rarity {
                armors_by_rarity
                    .entry(rarity.clone())
                    .or_default()
                    .extend(armor.display_names.iter().cloned());
            }
            all_items.extend(armor.display_names.iter().cloned());
        }
        for utility in &config.items.utilities {
            all_items.push(utility.name.clone());
        }
        for consumable in &config.items.consumables {
            all_items.push(consumable.name.clone());
        }
        for upgrader in &config.items.upgraders {
            all_items.extend(upgrader.display_names.iter().cloned());
        }

        Self {
            rarity_levels: config.rarity_levels.clone(),
            weapons_by_rarity,
            armors_by_rarity,
            all_items,
            existing: existing_items.iter().cloned().collect(),
        }
    }

    /// Replace the on-field name set.
    pub fn set_existing_items(&mut self, existing_items: &[String]) {
        self.existing = existing_items.iter().cloned().collect();
    }

    /// Every display name, in category walk order.
    pub fn all_item_names(&self) -> &[String] {
        &self.all_items
    }

    /// Weapon display names grouped by rarity internal name.
    pub fn weapons_by_rarity(&self) -> &BTreeMap<String, Vec<String>> {
        &self.weapons_by_rarity
    }

    /// Armor display names grouped by rarity internal name.
    pub fn armors_by_rarity(&self) -> &BTreeMap<String, Vec<String>> {
        &self.armors_by_rarity
    }

    /// Airdrop options per rarity and pool type.
    ///
    /// Rarities are listed in declared order, weapons before armors. Rarities
    /// with an empty pool or with `is_airdropped` unset are skipped.
    pub fn airdrop_options(&self) -> Vec<RarityOption> {
        let mut options = Vec::new();
        self.collect_options(AirdropItemType::Weapon, &self.weapons_by_rarity, &mut options);
        self.collect_options(AirdropItemType::Armor, &self.armors_by_rarity, &mut options);
        options
    }

    fn collect_options(
        &self,
        item_type: AirdropItemType,
        pools: &BTreeMap<String, Vec<String>>,
        options: &mut Vec<RarityOption>,
    ) {
        for rarity in &self.rarity_levels {
            if !rarity.is_airdropped {
                continue;
            }
            let Some(names) = pools.get(&rarity.internal_name) else {
                continue;
            };
            if names.is_empty() {
                continue;
            }
            let available = names.iter().filter(|n| !self.existing.contains(*n)).count();
            options.push(RarityOption {
                key: format!("{}_{}", item_type.key_prefix(), rarity.internal_name),
                label: format!(
                    "{} {} (limit {})",
                    rarity.display_name,
                    item_type.label_noun(),
                    available
                ),
                item_type,
                available,
                max: names.len(),
            });
        }
    }

    /// Randomly pick `count` names from the keyed pool, without replacement,
    /// skipping names already on the field.
    ///
    /// An unknown key behaves as an empty pool. The result flags whether the
    /// pool held fewer names than requested.
    pub fn pick_by_rarity<R: Rng>(&self, key: &str, count: usize, rng: &mut R) -> PickResult {
        let mut pool: Vec<&String> = match key.split_once('_') {
            Some(("weapon", rarity)) => self.available_names(&self.weapons_by_rarity, rarity),
            Some(("armor", rarity)) => self.available_names(&self.armors_by_rarity, rarity),
            _ => {
                log::warn!("unknown rarity pool key '{key}'");
                Vec::new()
            }
        };

        let insufficient = pool.len() < count;
        let mut selected = Vec::with_capacity(count.min(pool.len()));
        while selected.len() < count && !pool.is_empty() {
            let index = rng.gen_range(0..pool.len());
            selected.push(pool.swap_remove(index).clone());
        }

        PickResult {
            selected,
            insufficient,
        }
    }

    fn available_names<'a>(
        &'a self,
        pools: &'a BTreeMap<String, Vec<String>>,
        rarity: &str,
    ) -> Vec<&'a String> {
        pools
            .get(rarity)
            .map(|names| {
                names
                    .iter()
                    .filter(|n| !self.existing.contains(*n))
                    .collect()
            })
            .unwrap_or_default()
    }
}
