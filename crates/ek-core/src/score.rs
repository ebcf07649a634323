//! Clamped scoring accumulator and the final verdict.
//!
//! The emissary's regard for humanity is a single integer that every answer
//! nudges by ±1, clamped to [`SCORE_MIN`]..=[`SCORE_MAX`]. When the last
//! turn is answered, the final score alone decides the ending.

use serde::{Deserialize, Serialize};

/// Lowest possible score.
pub const SCORE_MIN: i32 = -10;

/// Highest possible score.
pub const SCORE_MAX: i32 = 10;

/// Earth is spared when the final score reaches this value.
pub const SPARED_THRESHOLD: i32 = 2;

/// Fold one answer's delta into the running score, clamped to the bounds.
///
/// The delta is ±1 by construction (enforced when the bank is loaded), so
/// there are no error conditions here.
pub fn apply_delta(before: i32, delta: i32) -> i32 {
    (before + delta).clamp(SCORE_MIN, SCORE_MAX)
}

/// The emissary's final judgement on Earth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Final score reached the threshold; Earth is spared.
    Spared,
    /// Final score fell short; Earth is destroyed.
    Doomed,
}

impl Verdict {
    /// Classify a final score. Depends only on the clamped score, never on
    /// the content of the answer history.
    pub fn from_score(score: i32) -> Self {
        if score >= SPARED_THRESHOLD {
            Self::Spared
        } else {
            Self::Doomed
        }
    }

    /// Whether this verdict spares Earth.
    pub fn spared(self) -> bool {
        matches!(self, Self::Spared)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Spared => write!(f, "Earth is spared"),
            Self::Doomed => write!(f, "Earth is destroyed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn delta_applies_within_bounds() {
        assert_eq!(apply_delta(0, 1), 1);
        assert_eq!(apply_delta(0, -1), -1);
        assert_eq!(apply_delta(5, -1), 4);
    }

    #[test]
    fn clamps_at_extremes() {
        assert_eq!(apply_delta(SCORE_MAX, 1), SCORE_MAX);
        assert_eq!(apply_delta(SCORE_MIN, -1), SCORE_MIN);
        assert_eq!(apply_delta(SCORE_MAX, -1), SCORE_MAX - 1);
        assert_eq!(apply_delta(SCORE_MIN, 1), SCORE_MIN + 1);
    }

    #[test]
    fn verdict_threshold_boundary() {
        assert_eq!(Verdict::from_score(SPARED_THRESHOLD), Verdict::Spared);
        assert_eq!(Verdict::from_score(SPARED_THRESHOLD - 1), Verdict::Doomed);
        assert_eq!(Verdict::from_score(SCORE_MAX), Verdict::Spared);
        assert_eq!(Verdict::from_score(SCORE_MIN), Verdict::Doomed);
        assert_eq!(Verdict::from_score(0), Verdict::Doomed);
        assert_eq!(Verdict::from_score(1), Verdict::Doomed);
    }

    #[test]
    fn round_trip_serde() {
        let json = serde_json::to_string(&Verdict::Spared).unwrap();
        let v: Verdict = serde_json::from_str(&json).unwrap();
        assert!(v.spared());
    }

    proptest! {
        /// Folding any ±1 delta sequence keeps the running score in bounds
        /// and equal to the clamp-free sum clamped at every step.
        #[test]
        fn running_score_stays_in_bounds(deltas in prop::collection::vec(prop_oneof![Just(1), Just(-1)], 0..64)) {
            let mut score = 0;
            for d in deltas {
                score = apply_delta(score, d);
                prop_assert!((SCORE_MIN..=SCORE_MAX).contains(&score));
            }
        }

        /// Without ever touching the bounds, the accumulator is a plain sum.
        #[test]
        fn unclamped_prefix_equals_sum(deltas in prop::collection::vec(prop_oneof![Just(1), Just(-1)], 0..10)) {
            let mut score = 0;
            for &d in &deltas {
                score = apply_delta(score, d);
            }
            // At most 10 steps from 0, so the clamp can never engage.
            prop_assert_eq!(score, deltas.iter().sum::<i32>());
        }
    }
}
