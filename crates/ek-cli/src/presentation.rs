//! Presentation-side resolvers: pure functions of engine state.
//!
//! The engine exposes score, phase, and turn; everything cosmetic derives
//! from those here. Portrait and cue identifiers are opaque strings for a
//! host that renders images or audio; the terminal frontend maps moods to
//! stage directions instead. The cue resolver is pure; [`CueTracker`] is the
//! thin stateful wrapper that suppresses repeats.

use ek_core::Verdict;
use ek_session::Phase;

/// The emissary's demeanor, in five tiers derived from the running score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    /// Score ≤ −4.
    SuperMad,
    /// Score in −3..=−2.
    Mad,
    /// Score in −1..=1.
    Neutral,
    /// Score in 2..=3.
    Happy,
    /// Score ≥ 4.
    SuperHappy,
}

impl Mood {
    /// Identifier fragment used in portrait asset paths.
    pub fn asset_key(self) -> &'static str {
        match self {
            Self::SuperMad => "super_mad",
            Self::Mad => "mad",
            Self::Neutral => "neutral",
            Self::Happy => "happy",
            Self::SuperHappy => "super_happy",
        }
    }

    /// A stage direction for terminal play.
    pub fn stage_direction(self) -> &'static str {
        match self {
            Self::SuperMad => "The emissary's lights burn a furious red.",
            Self::Mad => "The emissary's lights flicker with irritation.",
            Self::Neutral => "The emissary's lights hold a steady, unreadable white.",
            Self::Happy => "The emissary's lights warm toward gold.",
            Self::SuperHappy => "The emissary's lights ripple with something like delight.",
        }
    }
}

/// Map the running score to a mood tier.
pub fn score_to_mood(score: i32) -> Mood {
    if score <= -4 {
        Mood::SuperMad
    } else if score <= -2 {
        Mood::Mad
    } else if score >= 4 {
        Mood::SuperHappy
    } else if score >= 2 {
        Mood::Happy
    } else {
        Mood::Neutral
    }
}

/// Portrait asset path for the current turn and score.
pub fn portrait_path(turn_id: u32, score: i32) -> String {
    format!("images/alien_q{turn_id}_{}.png", score_to_mood(score).asset_key())
}

/// Ending image asset path for a verdict.
pub fn ending_path(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Spared => "images/ending_safe.png",
        Verdict::Doomed => "images/ending_explode.png",
    }
}

/// Audio cue identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Title/intro ambience.
    Intro,
    /// Question ambience, one per turn.
    Question(u32),
    /// Spared ending sting.
    EndingSafe,
    /// Doomed ending sting.
    EndingExplode,
}

/// Resolve the cue for the current state. Pure: no dedup, no side effects.
pub fn cue_for(phase: Phase, turn_id: Option<u32>, verdict: Option<Verdict>) -> Cue {
    match phase {
        Phase::Intro => Cue::Intro,
        Phase::InProgress => Cue::Question(turn_id.unwrap_or(1)),
        Phase::Ended => match verdict {
            Some(Verdict::Spared) => Cue::EndingSafe,
            _ => Cue::EndingExplode,
        },
    }
}

/// Remembers the last emitted cue and suppresses repeats, so a cue fires
/// once per state change rather than once per render.
#[derive(Debug, Default)]
pub struct CueTracker {
    last: Option<Cue>,
}

impl CueTracker {
    /// Create a tracker with no cue played yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit `cue` if it differs from the last emitted one.
    pub fn emit(&mut self, cue: Cue) -> Option<Cue> {
        if self.last == Some(cue) {
            return None;
        }
        self.last = Some(cue);
        Some(cue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mood_tiers() {
        assert_eq!(score_to_mood(-10), Mood::SuperMad);
        assert_eq!(score_to_mood(-4), Mood::SuperMad);
        assert_eq!(score_to_mood(-3), Mood::Mad);
        assert_eq!(score_to_mood(-2), Mood::Mad);
        assert_eq!(score_to_mood(-1), Mood::Neutral);
        assert_eq!(score_to_mood(0), Mood::Neutral);
        assert_eq!(score_to_mood(1), Mood::Neutral);
        assert_eq!(score_to_mood(2), Mood::Happy);
        assert_eq!(score_to_mood(3), Mood::Happy);
        assert_eq!(score_to_mood(4), Mood::SuperHappy);
        assert_eq!(score_to_mood(10), Mood::SuperHappy);
    }

    #[test]
    fn portrait_paths() {
        assert_eq!(portrait_path(1, -5), "images/alien_q1_super_mad.png");
        assert_eq!(portrait_path(10, 0), "images/alien_q10_neutral.png");
    }

    #[test]
    fn ending_paths() {
        assert_eq!(ending_path(Verdict::Spared), "images/ending_safe.png");
        assert_eq!(ending_path(Verdict::Doomed), "images/ending_explode.png");
    }

    #[test]
    fn cue_resolution() {
        assert_eq!(cue_for(Phase::Intro, None, None), Cue::Intro);
        assert_eq!(cue_for(Phase::InProgress, Some(3), None), Cue::Question(3));
        assert_eq!(
            cue_for(Phase::Ended, None, Some(Verdict::Spared)),
            Cue::EndingSafe
        );
        assert_eq!(
            cue_for(Phase::Ended, None, Some(Verdict::Doomed)),
            Cue::EndingExplode
        );
    }

    #[test]
    fn tracker_suppresses_repeats() {
        let mut tracker = CueTracker::new();
        assert_eq!(tracker.emit(Cue::Intro), Some(Cue::Intro));
        assert_eq!(tracker.emit(Cue::Intro), None);
        assert_eq!(tracker.emit(Cue::Question(1)), Some(Cue::Question(1)));
        assert_eq!(tracker.emit(Cue::Question(1)), None);
        assert_eq!(tracker.emit(Cue::Question(2)), Some(Cue::Question(2)));
    }
}
