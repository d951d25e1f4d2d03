//! Save/load system
//!
//! Persists the player record between sessions.

pub mod player_save;

pub use player_save::{
    SaveError, SaveSummary,
    save_player, load_player, load_summary, delete_player,
    player_exists, save_path, default_save_dir,
};
