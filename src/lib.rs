//! Solo Leveling - progression and reward engine
//!
//! Turns completed missions and dungeon runs into experience, levels,
//! hunter ranks, and equipment.

pub mod progression;
pub mod items;
pub mod rewards;
pub mod player;
pub mod data;
pub mod save;

// Re-export commonly used types
pub use progression::{Rank, LevelState, Stats, StatKind};
pub use rewards::{generate_rewards, DungeonRewards};
pub use player::PlayerState;
