//! Hunter ranks
//!
//! Ranks are a derived view of lifetime XP. They are recomputed on every
//! read and never stored.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Hunter rank tiers, lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    E,
    D,
    C,
    B,
    A,
    S,
    SS,
    SSS,
}

/// Rank thresholds in ascending order. Each rank starts at its threshold
/// (inclusive); thresholds are strictly increasing.
pub static RANK_TABLE: [(Rank, u64); 8] = [
    (Rank::E, 0),
    (Rank::D, 100),
    (Rank::C, 500),
    (Rank::B, 1_500),
    (Rank::A, 3_000),
    (Rank::S, 5_000),
    (Rank::SS, 10_000),
    (Rank::SSS, 20_000),
];

impl Rank {
    fn index(&self) -> usize {
        *self as usize
    }

    /// Lifetime XP at which this rank begins
    pub fn threshold(&self) -> u64 {
        RANK_TABLE[self.index()].1
    }

    /// The rank after this one, if any
    pub fn next(&self) -> Option<Rank> {
        RANK_TABLE.get(self.index() + 1).map(|&(rank, _)| rank)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Rank::E => "E",
            Rank::D => "D",
            Rank::C => "C",
            Rank::B => "B",
            Rank::A => "A",
            Rank::S => "S",
            Rank::SS => "SS",
            Rank::SSS => "SSS",
        }
    }

    /// All ranks in ascending order
    pub fn all() -> impl Iterator<Item = Rank> {
        RANK_TABLE.iter().map(|&(rank, _)| rank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-Rank", self.name())
    }
}

/// Highest rank whose threshold is at or below `xp`
pub fn rank_for_experience(xp: u64) -> Rank {
    RANK_TABLE
        .iter()
        .rev()
        .find(|&&(_, threshold)| xp >= threshold)
        .map(|&(rank, _)| rank)
        .unwrap_or(Rank::E)
}

/// Percent progress (0 to 100) from the current rank toward the next one.
/// The top rank always reports 100.
pub fn rank_progress(xp: u64) -> f64 {
    let rank = rank_for_experience(xp);
    let Some(next) = rank.next() else {
        return 100.0;
    };

    let floor = rank.threshold();
    let span = next.threshold() - floor;
    let progress = 100.0 * xp.saturating_sub(floor) as f64 / span as f64;
    progress.clamp(0.0, 100.0)
}

/// Lifetime XP still needed to reach the next rank
pub fn xp_to_next_rank(xp: u64) -> Option<u64> {
    rank_for_experience(xp)
        .next()
        .map(|next| next.threshold().saturating_sub(xp))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_ordered() {
        for pair in RANK_TABLE.windows(2) {
            assert!(pair[0].0 < pair[1].0);
            assert!(pair[0].1 < pair[1].1);
        }
        for (i, rank) in Rank::all().enumerate() {
            assert_eq!(rank.index(), i);
        }
    }

    #[test]
    fn test_rank_for_experience() {
        assert_eq!(rank_for_experience(0), Rank::E);
        assert_eq!(rank_for_experience(99), Rank::E);
        assert_eq!(rank_for_experience(100), Rank::D);
        assert_eq!(rank_for_experience(499), Rank::D);
        assert_eq!(rank_for_experience(500), Rank::C);
        assert_eq!(rank_for_experience(4_999), Rank::A);
        assert_eq!(rank_for_experience(20_000), Rank::SSS);
        assert_eq!(rank_for_experience(u64::MAX), Rank::SSS);
    }

    #[test]
    fn test_rank_monotonic() {
        let mut last = Rank::E;
        for xp in (0..25_000).step_by(7) {
            let rank = rank_for_experience(xp);
            assert!(rank >= last);
            last = rank;
        }
    }

    #[test]
    fn test_progress_at_thresholds() {
        for (rank, threshold) in RANK_TABLE {
            if rank == Rank::SSS {
                assert_eq!(rank_progress(threshold), 100.0);
            } else {
                assert_eq!(rank_progress(threshold), 0.0);
            }
        }
    }

    #[test]
    fn test_progress_interpolates() {
        assert_eq!(rank_progress(50), 50.0);
        assert_eq!(rank_progress(300), 50.0); // Halfway from 100 to 500
        assert_eq!(rank_progress(15_000), 50.0);
        assert_eq!(rank_progress(1_000_000), 100.0);
    }

    #[test]
    fn test_progress_in_range() {
        for xp in (0..30_000).step_by(13) {
            let p = rank_progress(xp);
            assert!((0.0..=100.0).contains(&p), "xp {} gave {}", xp, p);
        }
    }

    #[test]
    fn test_next_rank_and_gap() {
        assert_eq!(Rank::E.next(), Some(Rank::D));
        assert_eq!(Rank::SSS.next(), None);
        assert_eq!(xp_to_next_rank(0), Some(100));
        assert_eq!(xp_to_next_rank(1_200), Some(300));
        assert_eq!(xp_to_next_rank(20_000), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Rank::SS.to_string(), "SS-Rank");
    }
}
