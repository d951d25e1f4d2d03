//! Experience and leveling
//!
//! XP curve, level normalization, and progress helpers.

use serde::{Deserialize, Serialize};

/// Base cost multiplier of the leveling curve
pub const XP_CURVE_BASE: u64 = 100;

/// Level and unspent XP toward the next level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelState {
    pub level: u32,
    /// Remainder toward the current level's threshold, never lifetime XP
    pub xp: u64,
}

impl LevelState {
    pub fn new() -> Self {
        Self { level: 1, xp: 0 }
    }

    /// XP required to leave the current level
    pub fn xp_to_next(&self) -> u64 {
        xp_for_next_level(self.level)
    }

    /// Add XP and normalize, returning the new state and the level-up report
    pub fn gain(self, amount: u64) -> (Self, LevelUp) {
        let result = apply_experience(self.level, self.xp.saturating_add(amount));
        let state = Self { level: result.level, xp: result.xp };
        (state, result)
    }
}

impl Default for LevelState {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of normalizing a level/XP pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUp {
    pub level: u32,
    pub xp: u64,
    pub leveled_up: bool,
    pub xp_for_next_level: u64,
    starting_level: u32,
}

impl LevelUp {
    /// Number of levels gained in this normalization
    pub fn levels_gained(&self) -> u32 {
        self.level - self.starting_level
    }
}

/// XP needed to advance from `level` to `level + 1`: `100 * level^2`.
/// Saturates at `u64::MAX` for levels past roughly 429 million.
pub fn xp_for_next_level(level: u32) -> u64 {
    let level = level as u64;
    XP_CURVE_BASE.saturating_mul(level).saturating_mul(level)
}

/// Roll surplus XP into levels until the remainder fits under the threshold.
///
/// Supports multi-level jumps: level 1 with 600 XP lands on level 3 with 100
/// left over (600 - 100 - 400). Level 0 is not a valid input and is treated
/// as level 1.
pub fn apply_experience(current_level: u32, current_xp: u64) -> LevelUp {
    let starting_level = current_level.max(1);

    let mut level = starting_level;
    let mut xp = current_xp;
    let mut needed = xp_for_next_level(level);

    while xp >= needed {
        xp -= needed;
        level = level.saturating_add(1);
        needed = xp_for_next_level(level);
    }

    if level > starting_level {
        log::debug!("Level up: {} -> {} ({} xp carried)", starting_level, level, xp);
    }

    LevelUp {
        level,
        xp,
        leveled_up: level > starting_level,
        xp_for_next_level: needed,
        starting_level,
    }
}

/// Fraction of the way through the current level (0.0 to 1.0)
pub fn xp_progress(level: u32, xp: u64) -> f32 {
    let needed = xp_for_next_level(level.max(1));
    (xp as f32 / needed as f32).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xp_for_next_level() {
        assert_eq!(xp_for_next_level(1), 100);
        assert_eq!(xp_for_next_level(2), 400);
        assert_eq!(xp_for_next_level(3), 900);
        assert_eq!(xp_for_next_level(10), 10_000);
    }

    #[test]
    fn test_curve_strictly_increasing() {
        for level in 1..200 {
            assert!(xp_for_next_level(level + 1) > xp_for_next_level(level));
        }
    }

    #[test]
    fn test_no_level_up() {
        let result = apply_experience(1, 50);
        assert_eq!(result.level, 1);
        assert_eq!(result.xp, 50);
        assert!(!result.leveled_up);
        assert_eq!(result.xp_for_next_level, 100);
        assert_eq!(result.levels_gained(), 0);
    }

    #[test]
    fn test_single_level_up() {
        let result = apply_experience(1, 150);
        assert_eq!(result.level, 2);
        assert_eq!(result.xp, 50);
        assert!(result.leveled_up);
        assert_eq!(result.xp_for_next_level, 400);
    }

    #[test]
    fn test_multi_level_jump() {
        let result = apply_experience(1, 600);
        assert_eq!(result.level, 3);
        assert_eq!(result.xp, 100); // 600 - 100 - 400
        assert!(result.leveled_up);
        assert_eq!(result.levels_gained(), 2);
    }

    #[test]
    fn test_exact_threshold_levels_up() {
        let result = apply_experience(2, 400);
        assert_eq!(result.level, 3);
        assert_eq!(result.xp, 0);
    }

    #[test]
    fn test_remainder_always_below_threshold() {
        for level in 1..20 {
            for xp in (0..50_000).step_by(337) {
                let result = apply_experience(level, xp);
                assert!(result.xp < xp_for_next_level(result.level));
                assert_eq!(result.xp_for_next_level, xp_for_next_level(result.level));
                assert_eq!(result.leveled_up, result.level > level);
            }
        }
    }

    #[test]
    fn test_curve_saturates_at_extreme_levels() {
        assert_eq!(xp_for_next_level(u32::MAX), u64::MAX);
        assert_eq!(xp_for_next_level(500_000_000), u64::MAX);
        assert!(xp_for_next_level(429_496_729) < u64::MAX);
    }

    #[test]
    fn test_extreme_level_does_not_overflow() {
        let result = apply_experience(500_000_000, 0);
        assert_eq!(result.level, 500_000_000);
        assert!(!result.leveled_up);
        assert_eq!(result.xp_for_next_level, u64::MAX);

        let result = apply_experience(u32::MAX, u64::MAX);
        assert_eq!(result.level, u32::MAX);
        assert_eq!(result.xp, 0);
    }

    #[test]
    fn test_level_zero_treated_as_one() {
        let result = apply_experience(0, 150);
        assert_eq!(result.level, 2);
        assert_eq!(result.xp, 50);
        assert_eq!(result.levels_gained(), 1);
    }

    #[test]
    fn test_level_state_gain() {
        let state = LevelState { level: 1, xp: 90 };
        let (state, result) = state.gain(20);
        assert_eq!(state, LevelState { level: 2, xp: 10 });
        assert!(result.leveled_up);
        assert_eq!(state.xp_to_next(), 400);
    }

    #[test]
    fn test_xp_progress() {
        assert_eq!(xp_progress(1, 0), 0.0);
        assert_eq!(xp_progress(1, 50), 0.5);
        assert_eq!(xp_progress(2, 400), 1.0);
    }
}
