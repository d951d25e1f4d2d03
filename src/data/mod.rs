//! Data loading and external game content
//!
//! Dungeon and mission definitions, loaded from external RON files so
//! content can be tuned without a rebuild.

pub mod loader;
pub mod dungeons;
pub mod missions;

pub use loader::{DataManager, DataError, export_default_data, DEFAULT_DATA_DIR};
pub use dungeons::{Dungeon, Dungeons, default_dungeons};
pub use missions::{Mission, Missions, StatBonus, default_missions};
