//! Equipment definitions
//!
//! Equipment pieces, rarities, slots, and affixes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::progression::StatKind;

/// Unique item ID for tracking
pub type ItemId = u64;

/// Item rarity tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,     // Base power only
    Uncommon,   // 1 affix
    Rare,       // 2 affixes
    Epic,       // 3 affixes
    Legendary,  // 4 affixes, boss-tier gates only
}

impl Rarity {
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }

    /// Number of affixes rolled for this rarity
    pub fn affix_slots(&self) -> usize {
        match self {
            Rarity::Common => 0,
            Rarity::Uncommon => 1,
            Rarity::Rare => 2,
            Rarity::Epic => 3,
            Rarity::Legendary => 4,
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where a piece of equipment is worn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipSlot {
    Weapon,
    Head,
    Chest,
    Hands,
    Feet,
    Accessory,
}

impl EquipSlot {
    pub fn name(&self) -> &'static str {
        match self {
            EquipSlot::Weapon => "Weapon",
            EquipSlot::Head => "Head",
            EquipSlot::Chest => "Chest",
            EquipSlot::Hands => "Hands",
            EquipSlot::Feet => "Feet",
            EquipSlot::Accessory => "Accessory",
        }
    }

    /// Base item names offered for this slot
    pub fn base_names(&self) -> &'static [&'static str] {
        match self {
            EquipSlot::Weapon => &["Dagger", "Longsword", "Spear", "War Axe"],
            EquipSlot::Head => &["Hood", "Helm", "Circlet"],
            EquipSlot::Chest => &["Leather Coat", "Chainmail", "Plate Armor"],
            EquipSlot::Hands => &["Gloves", "Gauntlets"],
            EquipSlot::Feet => &["Boots", "Greaves"],
            EquipSlot::Accessory => &["Ring", "Amulet", "Earring"],
        }
    }

    /// Stats an affix on this slot can roll
    pub fn affix_pool(&self) -> &'static [StatKind] {
        match self {
            EquipSlot::Weapon => &[StatKind::Strength, StatKind::Agility, StatKind::Perception],
            EquipSlot::Accessory => &[StatKind::Intelligence, StatKind::Perception, StatKind::Agility],
            _ => &[StatKind::Vitality, StatKind::Strength, StatKind::Agility],
        }
    }

    /// Get all slots in display order
    pub fn all() -> &'static [EquipSlot] {
        &[
            EquipSlot::Weapon,
            EquipSlot::Head,
            EquipSlot::Chest,
            EquipSlot::Hands,
            EquipSlot::Feet,
            EquipSlot::Accessory,
        ]
    }
}

/// A stat bonus carried by a piece of equipment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Affix {
    pub stat: StatKind,
    pub value: i32,
}

/// A generated piece of equipment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: ItemId,
    pub name: String,
    pub slot: EquipSlot,
    pub rarity: Rarity,
    /// Player level the piece was generated for
    pub required_level: u32,
    /// Attack for weapons, defense for everything else
    pub base_power: i32,
    pub affixes: Vec<Affix>,
}

impl Equipment {
    /// Total bonus for one stat across all affixes
    pub fn stat_bonus(&self, stat: StatKind) -> i32 {
        self.affixes
            .iter()
            .filter(|a| a.stat == stat)
            .map(|a| a.value)
            .sum()
    }

    /// Rough power score used for sorting and display
    pub fn power_score(&self) -> i32 {
        self.base_power + self.affixes.iter().map(|a| a.value).sum::<i32>()
    }

    /// Build the display name from rarity and the strongest affix
    pub fn generate_name(&mut self, base: &str) {
        let prefix = match self.rarity {
            Rarity::Common => "",
            Rarity::Uncommon => "Sturdy ",
            Rarity::Rare => "Hunter's ",
            Rarity::Epic => "Knight's ",
            Rarity::Legendary => "Monarch's ",
        };

        let suffix = self
            .affixes
            .iter()
            .max_by_key(|a| a.value)
            .map(|a| match a.stat {
                StatKind::Strength => " of Might",
                StatKind::Agility => " of Haste",
                StatKind::Perception => " of Insight",
                StatKind::Vitality => " of Endurance",
                StatKind::Intelligence => " of the Mage",
            })
            .unwrap_or("");

        self.name = format!("{}{}{}", prefix, base, suffix);
    }
}

impl fmt::Display for Equipment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{} {}, power {}]", self.name, self.rarity, self.slot.name(), self.base_power)
    }
}
