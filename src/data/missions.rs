//! Mission definitions
//!
//! Daily quests and habits that grant XP directly, optionally with a
//! small stat bonus.

use serde::{Deserialize, Serialize};

use crate::progression::StatKind;

/// Stat bonus granted on completion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBonus {
    pub stat: StatKind,
    pub amount: i32,
}

/// A real-life task the player can complete
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    pub id: String,
    pub title: String,
    pub xp_reward: u64,
    #[serde(default)]
    pub stat_bonus: Option<StatBonus>,
}

impl Mission {
    pub fn new(id: &str, title: &str, xp_reward: u64) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            xp_reward,
            stat_bonus: None,
        }
    }

    pub fn with_bonus(mut self, stat: StatKind, amount: i32) -> Self {
        self.stat_bonus = Some(StatBonus { stat, amount });
        self
    }
}

/// Collection of mission definitions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Missions {
    pub missions: Vec<Mission>,
}

impl Missions {
    /// Find a mission by ID
    pub fn find(&self, id: &str) -> Option<&Mission> {
        self.missions.iter().find(|m| m.id == id)
    }
}

/// Create default missions (hardcoded fallback)
pub fn default_missions() -> Missions {
    Missions {
        missions: vec![
            Mission::new("pushups", "100 Push-ups", 25).with_bonus(StatKind::Strength, 1),
            Mission::new("situps", "100 Sit-ups", 25).with_bonus(StatKind::Vitality, 1),
            Mission::new("running", "10 km Run", 40).with_bonus(StatKind::Agility, 1),
            Mission::new("reading", "Read for 30 minutes", 20).with_bonus(StatKind::Intelligence, 1),
            Mission::new("meditation", "Meditate for 15 minutes", 15).with_bonus(StatKind::Perception, 1),
            Mission::new("chores", "Clean the apartment", 10),
        ],
    }
}
