//! Shared fixtures for tests.

use serde_json::{Value, json};

/// A fully valid rules configuration exercising every section.
pub(crate) fn sample_config() -> Value {
    json!({
        "map": {
            "places": ["Forest", "Beach", "Cave", "Clinic"],
            "safe_places": ["Clinic"]
        },
        "player": {
            "max_life": 100,
            "max_strength": 100,
            "daily_life_recovery": 0,
            "daily_strength_recovery": 40,
            "search_cooldown": 30,
            "max_backpack_items": 4,
            "unarmed_damage": 5
        },
        "action_costs": {
            "move": 5,
            "search": 5,
            "pick": 0,
            "attack": 0,
            "equip": 0,
            "use": 0,
            "throw": 0,
            "deliver": 105
        },
        "rest_mode": {
            "life_recovery": 25,
            "strength_recovery": 1000,
            "max_moves": 1
        },
        "death_item_disposition": "killer_takes_loot",
        "teammate_behavior": 5,
        "items_config": {
            "rarity_levels": [
                {
                    "internal_name": "common",
                    "display_name": "Common",
                    "prefix": "",
                    "is_airdropped": true
                },
                {
                    "internal_name": "legendary",
                    "display_name": "Legendary",
                    "prefix": "*",
                    "is_airdropped": true
                }
            ],
            "items": {
                "weapons": [
                    {
                        "internal_name": "iron_sword",
                        "display_names": ["Iron Sword"],
                        "rarity": "common",
                        "properties": { "damage": 15, "votes": 1 }
                    },
                    {
                        "internal_name": "dragon_lance",
                        "display_names": ["Dragon Lance", "Wyrm Lance"],
                        "rarity": "legendary",
                        "properties": {
                            "damage": 40,
                            "votes": 3,
                            "uses": 5,
                            "aoe_damage": 10,
                            "bleed_damage": 4
                        }
                    }
                ],
                "armors": [
                    {
                        "internal_name": "leather_vest",
                        "display_names": ["Leather Vest"],
                        "rarity": "common",
                        "properties": { "defense": 5, "votes": 1, "uses": 10 }
                    }
                ],
                "utilities": [
                    {
                        "name": "Bear Trap",
                        "properties": { "category": "trap", "damage": 20, "uses": 1 }
                    },
                    {
                        "name": "Compass",
                        "properties": { "category": "locator", "targets": 1, "uses_night": 1 }
                    }
                ],
                "consumables": [
                    {
                        "name": "Bandage",
                        "properties": { "effect_type": "heal", "effect_value": 20, "cure_bleed": 1 }
                    },
                    {
                        "name": "Ration",
                        "properties": { "effect_type": "restore_strength", "effect_value": 30 }
                    }
                ],
                "upgraders": [
                    {
                        "internal_name": "whetstone",
                        "display_names": ["Whetstone"]
                    }
                ]
            },
            "upgrade_recipes": {
                "whetstone": [
                    { "result": "Dragon Lance", "ingredients": ["Iron Sword", "Whetstone"] }
                ]
            }
        },
        "display_names": {
            "player_max_life": "Life",
            "player_max_strength": "Strength",
            "action_move": "Move",
            "rest_max_moves": "Max moves"
        }
    })
}
