//! Dungeon rewards

pub mod generator;

pub use generator::{
    generate_rewards, DungeonRewards,
    DEFEAT_XP_RATIO, GUARANTEED_DROP_TIER, LOOT_DROP_CHANCE, MAX_XP_VARIANCE, RARE_DROP_TIER,
};
