//! Progression systems

pub mod xp;
pub mod stats;
pub mod rank;

pub use xp::{LevelState, LevelUp, xp_for_next_level, apply_experience, xp_progress};
pub use stats::{Stats, StatKind, STAT_POINTS_PER_LEVEL, increase_stat, increase_stat_by_one};
pub use rank::{Rank, RANK_TABLE, rank_for_experience, rank_progress, xp_to_next_rank};
