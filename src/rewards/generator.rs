//! Dungeon reward generation
//!
//! Turns a dungeon clear (or failure) into XP, named loot, and equipment.
//! All randomness comes from the caller's RNG so outcomes can be replayed
//! from a seed.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::data::Dungeon;
use crate::items::{Equipment, EquipmentForge};

/// Share of base XP granted on defeat
pub const DEFEAT_XP_RATIO: f64 = 0.1;
/// Maximum bonus on top of base XP for a clear (0 to 20%)
pub const MAX_XP_VARIANCE: f64 = 0.2;
/// Independent chance for each loot pool entry to drop
pub const LOOT_DROP_CHANCE: f64 = 0.5;
/// Difficulty tier of the guaranteed equipment drop
pub const GUARANTEED_DROP_TIER: u32 = 3;
/// Difficulty tier of the rare bonus drop
pub const RARE_DROP_TIER: u32 = 4;

/// Everything a dungeon attempt pays out
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DungeonRewards {
    pub xp: u64,
    pub rewards: Vec<String>,
    pub equipment: Vec<Equipment>,
    /// Reserved for cosmetic unlocks; nothing sets it yet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlocked_title_id: Option<String>,
    /// Reserved for cosmetic unlocks; nothing sets it yet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlocked_frame_id: Option<String>,
}

impl DungeonRewards {
    /// Payout for a failed attempt: a tenth of the base XP and nothing else
    pub fn defeat(dungeon: &Dungeon) -> Self {
        Self {
            xp: (dungeon.base_xp as f64 * DEFEAT_XP_RATIO).floor() as u64,
            ..Self::default()
        }
    }
}

/// Generate the rewards for one dungeon attempt.
///
/// Defeat is deterministic and draws nothing from `rng`. A clear draws, in
/// order: the XP variance, one trial per loot pool entry, the guaranteed
/// equipment piece, the rare-drop roll, and the rare piece if it hit.
pub fn generate_rewards<R, F>(
    dungeon: &Dungeon,
    victory: bool,
    player_level: u32,
    rng: &mut R,
    forge: &F,
) -> DungeonRewards
where
    R: Rng + ?Sized,
    F: EquipmentForge,
{
    if !victory {
        let rewards = DungeonRewards::defeat(dungeon);
        log::debug!("{} failed: {} xp", dungeon.name, rewards.xp);
        return rewards;
    }

    let variance: f64 = rng.gen();
    // Only the bonus goes through f64 so large base values stay exact
    let bonus = (dungeon.base_xp as f64 * variance * MAX_XP_VARIANCE).floor() as u64;
    let xp = dungeon.base_xp.saturating_add(bonus);

    let rewards: Vec<String> = dungeon
        .loot_pool
        .iter()
        .filter(|_| rng.gen::<f64>() < LOOT_DROP_CHANCE)
        .cloned()
        .collect();

    let mut equipment = Vec::with_capacity(2);
    equipment.push(forge.forge(None, None, player_level, GUARANTEED_DROP_TIER, rng));

    if rng.gen::<f64>() < dungeon.rare_drop_rate {
        log::debug!("Rare drop in {}", dungeon.name);
        equipment.push(forge.forge(None, None, player_level, RARE_DROP_TIER, rng));
    }

    log::debug!(
        "{} cleared: {} xp, {} loot, {} equipment",
        dungeon.name,
        xp,
        rewards.len(),
        equipment.len()
    );

    DungeonRewards {
        xp,
        rewards,
        equipment,
        unlocked_title_id: None,
        unlocked_frame_id: None,
    }
}
