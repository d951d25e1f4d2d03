//! Player record
//!
//! The caller-owned state blob. Every update takes the old value and
//! returns a new one; storage and write-back belong to the caller.

use serde::{Deserialize, Serialize};

use crate::data::Mission;
use crate::items::Equipment;
use crate::progression::{
    rank_for_experience, rank_progress, LevelState, Rank, StatKind, Stats, STAT_POINTS_PER_LEVEL,
};
use crate::rewards::DungeonRewards;

/// Current record layout version
pub const PLAYER_STATE_VERSION: u32 = 1;

/// Persistent hunter record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub version: u32,
    pub name: String,
    pub level: LevelState,
    /// Total XP ever earned; drives rank and never decreases
    pub lifetime_xp: u64,
    pub stats: Stats,
    /// Unspent stat points
    pub stat_points: u32,
    /// Named loot collected from dungeons
    pub inventory: Vec<String>,
    pub equipment: Vec<Equipment>,
    pub completed_missions: u32,
    pub dungeons_cleared: u32,
    pub dungeons_failed: u32,
}

/// What changed when XP was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub xp_gained: u64,
    pub levels_gained: u32,
    pub new_level: u32,
    pub old_rank: Rank,
    pub new_rank: Rank,
}

impl Progress {
    pub fn leveled_up(&self) -> bool {
        self.levels_gained > 0
    }

    pub fn ranked_up(&self) -> bool {
        self.new_rank > self.old_rank
    }

    /// Stat points earned by this gain
    pub fn stat_points_earned(&self) -> u32 {
        self.levels_gained * STAT_POINTS_PER_LEVEL
    }
}

impl PlayerState {
    /// A fresh level 1 hunter
    pub fn new(name: &str) -> Self {
        Self {
            version: PLAYER_STATE_VERSION,
            name: name.to_string(),
            level: LevelState::new(),
            lifetime_xp: 0,
            stats: Stats::hunter_base(),
            stat_points: 0,
            inventory: Vec::new(),
            equipment: Vec::new(),
            completed_missions: 0,
            dungeons_cleared: 0,
            dungeons_failed: 0,
        }
    }

    /// Current rank, derived from lifetime XP
    pub fn rank(&self) -> Rank {
        rank_for_experience(self.lifetime_xp)
    }

    /// Percent progress toward the next rank
    pub fn rank_progress(&self) -> f64 {
        rank_progress(self.lifetime_xp)
    }

    /// Stats including all equipment affixes
    pub fn effective_stats(&self) -> Stats {
        self.equipment.iter().fold(self.stats, |stats, item| {
            item.affixes
                .iter()
                .fold(stats, |s, affix| s.with_increase(affix.stat, affix.value))
        })
    }

    /// Highest item ID held, if any
    pub fn max_item_id(&self) -> Option<u64> {
        self.equipment.iter().map(|e| e.id).max()
    }
}

/// Add XP, normalize the level, and grant stat points for each level gained
pub fn apply_experience_gain(state: &PlayerState, xp: u64) -> (PlayerState, Progress) {
    let old_rank = state.rank();
    let (level, result) = state.level.gain(xp);

    let mut next = state.clone();
    next.level = level;
    next.lifetime_xp = state.lifetime_xp.saturating_add(xp);
    next.stat_points += result.levels_gained() * STAT_POINTS_PER_LEVEL;

    let progress = Progress {
        xp_gained: xp,
        levels_gained: result.levels_gained(),
        new_level: level.level,
        old_rank,
        new_rank: next.rank(),
    };

    if progress.leveled_up() {
        log::info!("{} reached level {}", next.name, level.level);
    }
    if progress.ranked_up() {
        log::info!("{} promoted to {}", next.name, progress.new_rank);
    }

    (next, progress)
}

/// Apply a dungeon payout: XP, loot, equipment, and the clear/fail counters
pub fn apply_dungeon_rewards(
    state: &PlayerState,
    rewards: &DungeonRewards,
    victory: bool,
) -> (PlayerState, Progress) {
    let (mut next, progress) = apply_experience_gain(state, rewards.xp);
    next.inventory.extend(rewards.rewards.iter().cloned());
    next.equipment.extend(rewards.equipment.iter().cloned());
    if victory {
        next.dungeons_cleared += 1;
    } else {
        next.dungeons_failed += 1;
    }
    (next, progress)
}

/// Complete a mission: XP plus its stat bonus, if any
pub fn complete_mission(state: &PlayerState, mission: &Mission) -> (PlayerState, Progress) {
    let (mut next, progress) = apply_experience_gain(state, mission.xp_reward);
    if let Some(bonus) = mission.stat_bonus {
        next.stats = next.stats.with_increase(bonus.stat, bonus.amount);
    }
    next.completed_missions += 1;
    log::debug!("{} completed '{}'", next.name, mission.title);
    (next, progress)
}

/// Spend one stat point. Returns `None` when there are none to spend.
pub fn allocate_stat_point(state: &PlayerState, stat: StatKind) -> Option<PlayerState> {
    if state.stat_points == 0 {
        return None;
    }
    let mut next = state.clone();
    next.stat_points -= 1;
    next.stats = next.stats.with_increase(stat, 1);
    Some(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::{Affix, EquipSlot, Rarity};

    #[test]
    fn test_new_player() {
        let player = PlayerState::new("Jinwoo");
        assert_eq!(player.level, LevelState { level: 1, xp: 0 });
        assert_eq!(player.rank(), Rank::E);
        assert_eq!(player.rank_progress(), 0.0);
        assert_eq!(player.stat_points, 0);
    }

    #[test]
    fn test_gain_leaves_original_untouched() {
        let player = PlayerState::new("Jinwoo");
        let (next, progress) = apply_experience_gain(&player, 600);
        assert_eq!(player.level.level, 1);
        assert_eq!(player.lifetime_xp, 0);

        assert_eq!(next.level, LevelState { level: 3, xp: 100 });
        assert_eq!(next.lifetime_xp, 600);
        assert_eq!(next.stat_points, 2 * STAT_POINTS_PER_LEVEL);
        assert_eq!(progress.levels_gained, 2);
        assert_eq!(progress.stat_points_earned(), 6);
        assert_eq!(progress.old_rank, Rank::E);
        assert_eq!(progress.new_rank, Rank::C);
        assert!(progress.ranked_up());
    }

    #[test]
    fn test_lifetime_xp_only_grows() {
        let mut player = PlayerState::new("Jinwoo");
        let mut last = 0;
        for gain in [10, 0, 250, 5, 4_000] {
            player = apply_experience_gain(&player, gain).0;
            assert!(player.lifetime_xp >= last);
            last = player.lifetime_xp;
        }
        assert_eq!(player.lifetime_xp, 4_265);
        assert_eq!(player.rank(), Rank::A);
    }

    #[test]
    fn test_dungeon_rewards_applied() {
        let player = PlayerState::new("Jinwoo");
        let rewards = DungeonRewards {
            xp: 150,
            rewards: vec!["Mana Crystal".to_string()],
            equipment: vec![Equipment {
                id: 77,
                name: "Dagger".to_string(),
                slot: EquipSlot::Weapon,
                rarity: Rarity::Rare,
                required_level: 1,
                base_power: 9,
                affixes: vec![Affix { stat: StatKind::Agility, value: 3 }],
            }],
            ..DungeonRewards::default()
        };

        let (next, progress) = apply_dungeon_rewards(&player, &rewards, true);
        assert!(progress.leveled_up());
        assert_eq!(next.inventory, vec!["Mana Crystal"]);
        assert_eq!(next.equipment.len(), 1);
        assert_eq!(next.dungeons_cleared, 1);
        assert_eq!(next.max_item_id(), Some(77));
        assert_eq!(next.effective_stats().agility, 13);
        assert_eq!(next.stats.agility, 10);

        let (failed, _) = apply_dungeon_rewards(&next, &DungeonRewards::default(), false);
        assert_eq!(failed.dungeons_failed, 1);
        assert_eq!(failed.dungeons_cleared, 1);
    }

    #[test]
    fn test_mission_bonus() {
        let player = PlayerState::new("Jinwoo");
        let mission = Mission::new("pushups", "100 Push-ups", 25).with_bonus(StatKind::Strength, 1);
        let (next, progress) = complete_mission(&player, &mission);
        assert_eq!(next.stats.strength, 11);
        assert_eq!(next.level.xp, 25);
        assert_eq!(next.completed_missions, 1);
        assert!(!progress.leveled_up());
    }

    #[test]
    fn test_allocate_stat_point() {
        let player = PlayerState::new("Jinwoo");
        assert!(allocate_stat_point(&player, StatKind::Strength).is_none());

        let (leveled, _) = apply_experience_gain(&player, 100);
        let spent = allocate_stat_point(&leveled, StatKind::Vitality).expect("has points");
        assert_eq!(spent.stat_points, STAT_POINTS_PER_LEVEL - 1);
        assert_eq!(spent.stats.vitality, 11);
    }
}
