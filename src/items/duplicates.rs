//! Cross-category duplicate display-name scan.

use std::collections::HashSet;

use super::model::NormalizedItemsConfig;

/// Find display names reused anywhere across the five item categories.
///
/// Walks weapons -> armors -> utilities -> consumables -> upgraders; weapons,
/// armors and upgraders contribute every display name, utilities and
/// consumables their single name. Matching is case-sensitive and exact; no
/// whitespace or case normalization is applied. The returned list is itself
/// deduplicated, in first-collision order; empty means no collisions. Empty
/// names are skipped (a missing name is a validation defect, not a collision).
pub fn find_duplicate_names(config: &NormalizedItemsConfig) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut duplicates: Vec<String> = Vec::new();

    let mut track = |name: &str| {
        if name.is_empty() {
            return;
        }
        if !seen.insert(name.to_string()) && !duplicates.iter().any(|d| d == name) {
            duplicates.push(name.to_string());
        }
    };

    for weapon in &config.items.weapons {
        for name in &weapon.display_names {
            track(name);
        }
    }
    for armor in &config.items.armors {
        for name in &armor.display_names {
            track(name);
        }
    }
    for utility in &config.items.utilities {
        track(&utility.name);
    }
    for consumable in &config.items.consumables {
        track(&consumable.name);
    }
    for upgrader in &config.items.upgraders {
        for name in &upgrader.display_names {
            track(name);
        }
    }

    duplicates
}
