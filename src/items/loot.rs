//! Equipment generation
//!
//! Rolls rarity, slot, base power and affixes for dungeon drops. Higher
//! difficulty tiers shift the rarity table toward better items.

use std::sync::atomic::{AtomicU64, Ordering};

use rand::seq::SliceRandom;
use rand::Rng;

use super::item::{Affix, EquipSlot, Equipment, ItemId, Rarity};

/// Counter for generating unique item IDs
static NEXT_ITEM_ID: AtomicU64 = AtomicU64::new(1);

/// Get next unique item ID
pub fn next_item_id() -> ItemId {
    NEXT_ITEM_ID.fetch_add(1, Ordering::Relaxed)
}

/// Make sure future IDs never collide with ones already handed out
/// (used after loading a saved player).
pub fn reserve_item_ids_through(max_id: ItemId) {
    reserve_through(&NEXT_ITEM_ID, max_id);
}

fn reserve_through(counter: &AtomicU64, max_id: ItemId) {
    counter.fetch_max(max_id.saturating_add(1), Ordering::Relaxed);
}

/// Supplier of equipment for the reward generator.
///
/// `slot` and `rarity` pin those properties when given; otherwise they are
/// rolled. Every call returns exactly one item.
pub trait EquipmentForge {
    fn forge<R: Rng + ?Sized>(
        &self,
        slot: Option<EquipSlot>,
        rarity: Option<Rarity>,
        player_level: u32,
        difficulty: u32,
        rng: &mut R,
    ) -> Equipment;
}

/// Default forge backed by the rarity tables below
#[derive(Debug, Clone, Copy, Default)]
pub struct LootForge;

impl EquipmentForge for LootForge {
    fn forge<R: Rng + ?Sized>(
        &self,
        slot: Option<EquipSlot>,
        rarity: Option<Rarity>,
        player_level: u32,
        difficulty: u32,
        rng: &mut R,
    ) -> Equipment {
        generate_equipment(slot, rarity, player_level, difficulty, rng)
    }
}

/// Roll a rarity for the given difficulty tier
pub fn roll_rarity<R: Rng + ?Sized>(difficulty: u32, rng: &mut R) -> Rarity {
    // Use 1000 for finer granularity on rare drops
    let roll = rng.gen_range(0..1000);

    // Legendary: none below tier 3, 0.5% at tier 3, up to 3% at tier 5+
    // Epic: 0.5% at tier 1, up to 10%
    // Rare: 5% at tier 1, up to 25%
    // Uncommon: 25% at tier 1, up to 45%
    let (legendary, epic, rare, uncommon) = match difficulty {
        0..=1 => (1000, 995, 950, 750),
        2 => (1000, 985, 920, 700),
        3 => (995, 965, 880, 650),
        4 => (985, 940, 840, 600),
        _ => (970, 900, 800, 550),
    };

    if roll >= legendary {
        Rarity::Legendary
    } else if roll >= epic {
        Rarity::Epic
    } else if roll >= rare {
        Rarity::Rare
    } else if roll >= uncommon {
        Rarity::Uncommon
    } else {
        Rarity::Common
    }
}

/// Flat power bonus granted by rarity
pub fn rarity_power_bonus<R: Rng + ?Sized>(rarity: Rarity, rng: &mut R) -> i32 {
    match rarity {
        Rarity::Common => 0,
        Rarity::Uncommon => rng.gen_range(2..=4),
        Rarity::Rare => rng.gen_range(5..=8),
        Rarity::Epic => rng.gen_range(9..=14),
        Rarity::Legendary => rng.gen_range(15..=22),
    }
}

/// Roll one affix for a slot, scaled by rarity and player level
pub fn roll_affix<R: Rng + ?Sized>(slot: EquipSlot, rarity: Rarity, player_level: u32, rng: &mut R) -> Affix {
    let stat = slot
        .affix_pool()
        .choose(rng)
        .copied()
        .unwrap_or(crate::progression::StatKind::Vitality);

    let level_bonus = (player_level / 5) as i32;
    let (min, max) = match rarity {
        Rarity::Common | Rarity::Uncommon => (1, 3),
        Rarity::Rare => (2, 5),
        Rarity::Epic => (4, 8),
        Rarity::Legendary => (6, 12),
    };

    Affix {
        stat,
        value: rng.gen_range(min..=max) + level_bonus,
    }
}

/// Generate a single piece of equipment
pub fn generate_equipment<R: Rng + ?Sized>(
    slot: Option<EquipSlot>,
    rarity: Option<Rarity>,
    player_level: u32,
    difficulty: u32,
    rng: &mut R,
) -> Equipment {
    let slot = slot.unwrap_or_else(|| {
        EquipSlot::all().choose(rng).copied().unwrap_or(EquipSlot::Weapon)
    });
    let rarity = rarity.unwrap_or_else(|| roll_rarity(difficulty, rng));

    let base = match slot {
        EquipSlot::Weapon => 8,
        EquipSlot::Chest => 5,
        _ => 3,
    };
    let base_power = base
        + (player_level.max(1) as i32 - 1) / 2
        + difficulty as i32 * 2
        + rarity_power_bonus(rarity, rng);

    let affixes = (0..rarity.affix_slots())
        .map(|_| roll_affix(slot, rarity, player_level, rng))
        .collect();

    let mut item = Equipment {
        id: next_item_id(),
        name: String::new(),
        slot,
        rarity,
        required_level: player_level,
        base_power,
        affixes,
    };

    let base_name = slot.base_names().choose(rng).copied().unwrap_or("Relic");
    item.generate_name(base_name);

    log::debug!("Forged {} (tier {}, level {})", item.name, difficulty, player_level);
    item
}
