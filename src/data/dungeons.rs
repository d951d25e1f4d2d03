//! Dungeon definitions for data-driven reward tables
//!
//! Loaded from RON files, with hardcoded gates as the fallback.

use serde::{Deserialize, Serialize};

/// A completable challenge with a fixed reward table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dungeon {
    /// Unique dungeon ID for reference
    pub id: String,
    /// Display name
    pub name: String,
    /// Base XP granted on a clear
    pub base_xp: u64,
    /// Named loot, each rolled independently on a clear
    pub loot_pool: Vec<String>,
    /// Chance (0.0 to 1.0) of a bonus high-tier equipment drop
    pub rare_drop_rate: f64,
    /// Suggested minimum player level
    #[serde(default = "default_recommended_level")]
    pub recommended_level: u32,
    /// Optional flavor text
    #[serde(default)]
    pub description: Option<String>,
}

fn default_recommended_level() -> u32 {
    1
}

impl Dungeon {
    pub fn new(id: &str, name: &str, base_xp: u64, loot_pool: &[&str], rare_drop_rate: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            base_xp,
            loot_pool: loot_pool.iter().map(|s| s.to_string()).collect(),
            rare_drop_rate,
            recommended_level: 1,
            description: None,
        }
    }

    pub fn with_recommended_level(mut self, level: u32) -> Self {
        self.recommended_level = level;
        self
    }

    pub fn with_description(mut self, text: &str) -> Self {
        self.description = Some(text.to_string());
        self
    }
}

/// Collection of dungeon definitions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dungeons {
    pub dungeons: Vec<Dungeon>,
}

impl Dungeons {
    /// Find a dungeon by ID
    pub fn find(&self, id: &str) -> Option<&Dungeon> {
        self.dungeons.iter().find(|d| d.id == id)
    }

    /// Dungeons a player of `level` is ready for
    pub fn available_for(&self, level: u32) -> Vec<&Dungeon> {
        self.dungeons.iter()
            .filter(|d| d.recommended_level <= level)
            .collect()
    }
}

/// Create default dungeons (hardcoded fallback)
pub fn default_dungeons() -> Dungeons {
    Dungeons {
        dungeons: vec![
            Dungeon::new("e_rank_gate", "E-Rank Gate", 50, &["Mana Crystal", "Goblin Ear"], 0.05)
                .with_description("A low-grade gate full of goblins."),
            Dungeon::new("d_rank_gate", "D-Rank Gate", 120, &["Mana Crystal", "Wolf Fang", "Healing Potion"], 0.08)
                .with_recommended_level(3)
                .with_description("Steel-fanged lycans prowl the caves."),
            Dungeon::new("c_rank_gate", "C-Rank Gate", 300, &["High-Grade Mana Crystal", "Orc Tusk", "Healing Potion"], 0.12)
                .with_recommended_level(6),
            Dungeon::new("double_dungeon", "Double Dungeon", 800, &["Rune Stone", "Statue Fragment", "Elixir of Life"], 0.2)
                .with_recommended_level(10)
                .with_description("A temple whose commandments must be obeyed."),
            Dungeon::new("demon_castle", "Demon's Castle", 2_000, &["Demon Soul", "Castle Key", "Elixir of Life", "Rune Stone"], 0.3)
                .with_recommended_level(20),
        ],
    }
}
