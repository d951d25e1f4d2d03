//! Player save/load
//!
//! Stores the player record as pretty JSON, one file per slot.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::player::{PlayerState, PLAYER_STATE_VERSION};

/// Save error types
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Save version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },
    #[error("No save in slot {0}")]
    Missing(u8),
    #[error("Invalid save data: {0}")]
    Invalid(String),
}

/// Brief summary of a save for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveSummary {
    pub name: String,
    pub level: u32,
    pub lifetime_xp: u64,
}

/// Default save directory for this platform
pub fn default_save_dir() -> PathBuf {
    use directories::ProjectDirs;

    if let Some(proj_dirs) = ProjectDirs::from("com", "sololeveling", "SoloLeveling") {
        let mut path = proj_dirs.data_local_dir().to_path_buf();
        path.push("saves");
        path
    } else {
        // Fallback to current directory
        PathBuf::from("./saves")
    }
}

/// Get the path for a specific save slot
pub fn save_path(dir: &Path, slot: u8) -> PathBuf {
    dir.join(format!("player_{}.json", slot))
}

/// Check if a save exists in the given slot
pub fn player_exists(dir: &Path, slot: u8) -> bool {
    save_path(dir, slot).exists()
}

/// Save the player to a slot
pub fn save_player(player: &PlayerState, dir: &Path, slot: u8) -> Result<(), SaveError> {
    fs::create_dir_all(dir)?;

    let json = serde_json::to_string_pretty(player)?;
    fs::write(save_path(dir, slot), json)?;

    log::info!("Player saved to slot {}", slot);
    Ok(())
}

/// Load the player from a slot
pub fn load_player(dir: &Path, slot: u8) -> Result<PlayerState, SaveError> {
    let path = save_path(dir, slot);
    if !path.exists() {
        return Err(SaveError::Missing(slot));
    }

    let data = fs::read_to_string(&path)?;
    let player: PlayerState = serde_json::from_str(&data)?;

    if player.version != PLAYER_STATE_VERSION {
        return Err(SaveError::VersionMismatch {
            expected: PLAYER_STATE_VERSION,
            found: player.version,
        });
    }
    if player.level.level == 0 {
        return Err(SaveError::Invalid("level must be at least 1".to_string()));
    }

    log::info!("Player loaded from slot {}", slot);
    Ok(player)
}

/// Load just the summary from a save file
pub fn load_summary(dir: &Path, slot: u8) -> Result<SaveSummary, SaveError> {
    let player = load_player(dir, slot)?;
    Ok(SaveSummary {
        name: player.name,
        level: player.level.level,
        lifetime_xp: player.lifetime_xp,
    })
}

/// Delete a save slot
pub fn delete_player(dir: &Path, slot: u8) -> Result<(), SaveError> {
    let path = save_path(dir, slot);
    if path.exists() {
        fs::remove_file(&path)?;
        log::info!("Deleted save slot {}", slot);
    }
    Ok(())
}
