//! Player record and its update functions

pub mod state;

pub use state::{
    PlayerState, Progress, PLAYER_STATE_VERSION,
    apply_experience_gain, apply_dungeon_rewards, complete_mission, allocate_stat_point,
};
