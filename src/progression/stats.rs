//! Hunter attributes
//!
//! The five core stats and the additive helpers used when spending
//! stat points or applying mission bonuses.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stat points granted for every level gained
pub const STAT_POINTS_PER_LEVEL: u32 = 3;

/// Add `amount` to a stat value. No clamping.
pub fn increase_stat(current_value: i32, amount: i32) -> i32 {
    current_value + amount
}

/// Add a single point to a stat value
pub fn increase_stat_by_one(current_value: i32) -> i32 {
    increase_stat(current_value, 1)
}

/// Core attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatKind {
    Strength,
    Agility,
    Perception,
    Vitality,
    Intelligence,
}

impl StatKind {
    pub fn name(&self) -> &'static str {
        match self {
            StatKind::Strength => "Strength",
            StatKind::Agility => "Agility",
            StatKind::Perception => "Perception",
            StatKind::Vitality => "Vitality",
            StatKind::Intelligence => "Intelligence",
        }
    }

    /// Three-letter abbreviation shown on the status window
    pub fn short(&self) -> &'static str {
        match self {
            StatKind::Strength => "STR",
            StatKind::Agility => "AGI",
            StatKind::Perception => "PER",
            StatKind::Vitality => "VIT",
            StatKind::Intelligence => "INT",
        }
    }

    /// All stats in display order
    pub fn all() -> &'static [StatKind] {
        &[
            StatKind::Strength,
            StatKind::Agility,
            StatKind::Perception,
            StatKind::Vitality,
            StatKind::Intelligence,
        ]
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StatKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatKind::all()
            .iter()
            .copied()
            .find(|k| k.name().eq_ignore_ascii_case(s) || k.short().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown stat '{}'", s))
    }
}

/// Hunter stat block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub strength: i32,
    pub agility: i32,
    pub perception: i32,
    pub vitality: i32,
    pub intelligence: i32,
}

impl Stats {
    pub fn new(str: i32, agi: i32, per: i32, vit: i32, int: i32) -> Self {
        Self {
            strength: str,
            agility: agi,
            perception: per,
            vitality: vit,
            intelligence: int,
        }
    }

    /// Starting stats for a fresh hunter
    pub fn hunter_base() -> Self {
        Self::new(10, 10, 10, 10, 10)
    }

    pub fn get(&self, kind: StatKind) -> i32 {
        match kind {
            StatKind::Strength => self.strength,
            StatKind::Agility => self.agility,
            StatKind::Perception => self.perception,
            StatKind::Vitality => self.vitality,
            StatKind::Intelligence => self.intelligence,
        }
    }

    /// Copy of these stats with `amount` added to one of them
    pub fn with_increase(&self, kind: StatKind, amount: i32) -> Self {
        let mut stats = *self;
        let slot = match kind {
            StatKind::Strength => &mut stats.strength,
            StatKind::Agility => &mut stats.agility,
            StatKind::Perception => &mut stats.perception,
            StatKind::Vitality => &mut stats.vitality,
            StatKind::Intelligence => &mut stats.intelligence,
        };
        *slot = increase_stat(*slot, amount);
        stats
    }

    /// Sum of all attributes
    pub fn total(&self) -> i32 {
        StatKind::all().iter().map(|&k| self.get(k)).sum()
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self::hunter_base()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increase_stat() {
        assert_eq!(increase_stat_by_one(10), 11);
        assert_eq!(increase_stat(10, 5), 15);
        assert_eq!(increase_stat(10, -3), 7); // No clamping either way
    }

    #[test]
    fn test_with_increase_touches_one_stat() {
        let base = Stats::hunter_base();
        let buffed = base.with_increase(StatKind::Perception, 2);
        assert_eq!(buffed.perception, 12);
        assert_eq!(buffed.strength, 10);
        assert_eq!(buffed.total(), base.total() + 2);
        assert_eq!(base.perception, 10); // Original untouched
    }

    #[test]
    fn test_parse_stat_kind() {
        assert_eq!("str".parse::<StatKind>(), Ok(StatKind::Strength));
        assert_eq!("Vitality".parse::<StatKind>(), Ok(StatKind::Vitality));
        assert!("luck".parse::<StatKind>().is_err());
    }
}
