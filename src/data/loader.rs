//! RON data loader
//!
//! Loads dungeon and mission definitions from external RON files, with
//! fallback to hardcoded defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use super::dungeons::{default_dungeons, Dungeons};
use super::missions::{default_missions, Missions};

/// Default location of the data files
pub const DEFAULT_DATA_DIR: &str = "assets/data";

/// Data file errors
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
    #[error("failed to write {path}: {reason}")]
    Write { path: PathBuf, reason: String },
}

/// Manages all external game data
#[derive(Debug, Clone)]
pub struct DataManager {
    pub dungeons: Dungeons,
    pub missions: Missions,
}

impl DataManager {
    /// Load from `dir`, falling back to defaults per file
    pub fn load(dir: &Path) -> Self {
        Self {
            dungeons: load_or_default(&dir.join("dungeons.ron"), default_dungeons),
            missions: load_or_default(&dir.join("missions.ron"), default_missions),
        }
    }
}

/// Parse one RON file
pub fn load_file<T: DeserializeOwned>(path: &Path) -> Result<T, DataError> {
    let content = fs::read_to_string(path).map_err(|source| DataError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    ron::from_str(&content).map_err(|source| DataError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn load_or_default<T: DeserializeOwned>(path: &Path, fallback: fn() -> T) -> T {
    if !path.exists() {
        log::debug!("{} not found, using defaults", path.display());
        return fallback();
    }
    match load_file(path) {
        Ok(data) => {
            log::info!("Loaded {}", path.display());
            data
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            fallback()
        }
    }
}

fn write_file<T: Serialize>(path: &Path, data: &T) -> Result<(), DataError> {
    let text = ron::ser::to_string_pretty(data, ron::ser::PrettyConfig::default())
        .map_err(|e| DataError::Write { path: path.to_path_buf(), reason: e.to_string() })?;
    fs::write(path, text)
        .map_err(|e| DataError::Write { path: path.to_path_buf(), reason: e.to_string() })
}

/// Export all default data to RON files for easy editing
pub fn export_default_data(dir: &Path) -> Result<(), DataError> {
    fs::create_dir_all(dir)
        .map_err(|e| DataError::Write { path: dir.to_path_buf(), reason: e.to_string() })?;

    write_file(&dir.join("dungeons.ron"), &default_dungeons())?;
    write_file(&dir.join("missions.ron"), &default_missions())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("solo_leveling_data_{}_{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_missing_dir_uses_defaults() {
        let manager = DataManager::load(&scratch_dir("missing"));
        assert_eq!(manager.dungeons.dungeons, default_dungeons().dungeons);
        assert_eq!(manager.missions.missions, default_missions().missions);
    }

    #[test]
    fn test_export_then_load() {
        let dir = scratch_dir("export");
        export_default_data(&dir).expect("export");
        assert!(dir.join("dungeons.ron").exists());
        assert!(dir.join("missions.ron").exists());

        let dungeons: Dungeons = load_file(&dir.join("dungeons.ron")).expect("parse dungeons");
        assert_eq!(dungeons.dungeons, default_dungeons().dungeons);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_bad_file_falls_back() {
        let dir = scratch_dir("bad");
        fs::create_dir_all(&dir).expect("mkdir");
        fs::write(dir.join("dungeons.ron"), "(dungeons: [oops])").expect("write");

        assert!(matches!(
            load_file::<Dungeons>(&dir.join("dungeons.ron")),
            Err(DataError::Parse { .. })
        ));
        let manager = DataManager::load(&dir);
        assert_eq!(manager.dungeons.dungeons.len(), default_dungeons().dungeons.len());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_bundled_assets_parse() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_DATA_DIR);
        let dungeons: Dungeons = load_file(&dir.join("dungeons.ron")).expect("bundled dungeons");
        let missions: Missions = load_file(&dir.join("missions.ron")).expect("bundled missions");
        assert!(dungeons.find("e_rank_gate").is_some());
        assert!(missions.find("pushups").is_some());
    }
}
