// Affix data shapes
//
// Items and affixes are planned but nothing rolls, reads or writes them yet.
// The shapes are kept so crafting can be built on top of them later.

#![allow(dead_code)] // Reserved for the crafting system

use serde::{Deserialize, Serialize};

/// Number of affix slots on every item
pub const ITEM_AFFIX_SLOTS: usize = 6;

/// Modifiers an item could roll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AffixKind {
    #[serde(rename = "AFFIX_FIRE_RES")]
    FireResistance,
    #[serde(rename = "AFFIX_COLD_RES")]
    ColdResistance,
    #[serde(rename = "AFFIX_LIGHTNING_RES")]
    LightningResistance,
    #[serde(rename = "AFFIX_ALL_RES")]
    AllResistances,
    #[serde(rename = "AFFIX_CHAOS_RES")]
    ChaosResistance,
    #[serde(rename = "AFFIX_EVASION_RATING")]
    EvasionRating,
    #[serde(rename = "AFFIX_ARMOUR")]
    Armour,
    #[serde(rename = "AFFIX_ENERGY_SHIELD")]
    EnergyShield,
    #[serde(rename = "AFFIX_INCREASED_ENERGY_SHIELD")]
    IncreasedEnergyShield,
}

/// One entry of an affix pool: a value range at a given tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffixPoolItem {
    pub name: String,
    pub min: i32,
    pub max: i32,
    pub tier: i32,
}

/// An affix rolled onto an item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemAffix {
    pub pool_item: AffixPoolItem,
    pub description: String,
    pub min_value: i32,
    pub max_value: i32,
}

/// The item being crafted on
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub name: String,
    pub affixes: [Option<ItemAffix>; ITEM_AFFIX_SLOTS],
}

impl Item {
    /// Creates an item with every affix slot empty
    pub fn new(name: impl Into<String>) -> Self {
        Item {
            name: name.into(),
            affixes: Default::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_has_six_empty_slots() {
        let item = Item::new("Ring");
        assert_eq!(item.name, "Ring");
        assert_eq!(item.affixes.len(), 6);
        assert!(item.affixes.iter().all(Option::is_none));
    }
}
