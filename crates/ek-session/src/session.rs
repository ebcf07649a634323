//! The session state machine.

use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use ek_core::{Choice, QuestionBank, Turn, Verdict, apply_delta, shuffled};

use crate::config::SessionConfig;
use crate::error::{SessionError, SessionResult};
use crate::record::AnswerRecord;

/// Where a playthrough currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Before the player has begun.
    Intro,
    /// Questions are being asked.
    InProgress,
    /// The last turn has been answered.
    Ended,
}

/// The ending explanation slot.
///
/// The session ends and exposes score/history immediately; the explanation
/// arrives later, or never. `Pending` is the player-visible "generating"
/// state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Explanation {
    /// No synthesis has been started for this session generation.
    Absent,
    /// Synthesis is in flight.
    Pending,
    /// The synthesized (or fallback) report.
    Ready(String),
}

/// One playthrough: phase, clamped score, append-only history, and the
/// current turn's shuffled display choices.
///
/// All mutation goes through `begin`, `answer`, `reset`, and
/// `resolve_explanation`; everything else is a read accessor. The bank is
/// shared and read-only, so any number of sessions can run against it.
pub struct Session {
    bank: Arc<QuestionBank>,
    phase: Phase,
    current_turn: Option<u32>,
    score: i32,
    history: Vec<AnswerRecord>,
    display: Vec<Choice>,
    explanation: Explanation,
    generation: u64,
    rng: StdRng,
}

impl Session {
    /// Create a session in the intro phase.
    pub fn new(bank: Arc<QuestionBank>, config: SessionConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            bank,
            phase: Phase::Intro,
            current_turn: None,
            score: 0,
            history: Vec::new(),
            display: Vec::new(),
            explanation: Explanation::Absent,
            generation: 0,
            rng,
        }
    }

    /// Begin the questions: intro → in progress, entering the first turn
    /// with a fresh shuffle.
    pub fn begin(&mut self) -> SessionResult<()> {
        if self.phase != Phase::Intro {
            return Err(SessionError::AlreadyBegun);
        }

        let first_id = self.bank.first_id();
        let first = self
            .bank
            .get(first_id)
            .ok_or(SessionError::TurnNotFound(first_id))?;

        self.display = shuffled(&first.choices, &mut self.rng);
        self.current_turn = Some(first_id);
        self.phase = Phase::InProgress;
        Ok(())
    }

    /// Answer the current turn by display ordinal (1..=4).
    ///
    /// Applies the choice's delta to the clamped score, appends an
    /// [`AnswerRecord`], then follows the chosen outcome's successor turn.
    /// When the successor is absent or missing from the bank, the session
    /// ends.
    pub fn answer(&mut self, ordinal: usize) -> SessionResult<()> {
        if self.phase != Phase::InProgress {
            return Err(SessionError::NotInProgress);
        }

        let turn_id = self.current_turn.ok_or(SessionError::NotInProgress)?;
        let turn = self
            .bank
            .get(turn_id)
            .ok_or(SessionError::TurnNotFound(turn_id))?;

        if !(1..=self.display.len()).contains(&ordinal) {
            return Err(SessionError::InvalidOrdinal(ordinal));
        }
        let choice = self.display[ordinal - 1].clone();

        let score_before = self.score;
        let score_after = apply_delta(score_before, choice.delta);
        self.score = score_after;

        self.history.push(AnswerRecord {
            turn_id,
            chosen_ordinal: ordinal,
            prompt_text: turn.prompt.clone(),
            chosen_text: choice.text.clone(),
            outcome: choice.outcome,
            delta: choice.delta,
            score_before,
            score_after,
        });

        let next = turn
            .next_for(choice.outcome)
            .and_then(|id| self.bank.get(id));
        match next {
            Some(next_turn) => {
                self.current_turn = Some(next_turn.id);
                self.display = shuffled(&next_turn.choices, &mut self.rng);
            }
            None => {
                self.current_turn = None;
                self.display = Vec::new();
                self.phase = Phase::Ended;
            }
        }

        Ok(())
    }

    /// Reset to the intro from any state: score 0, empty history, no
    /// explanation. Bumps the generation so any in-flight synthesis for the
    /// old playthrough is discarded on arrival. The RNG is kept, so replayed
    /// turns get fresh permutations.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.phase = Phase::Intro;
        self.current_turn = None;
        self.score = 0;
        self.history = Vec::new();
        self.display = Vec::new();
        self.explanation = Explanation::Absent;
    }

    /// Mark the explanation slot as generating. Only meaningful once ended.
    pub fn mark_explanation_pending(&mut self) {
        if self.phase == Phase::Ended {
            self.explanation = Explanation::Pending;
        }
    }

    /// Commit a synthesized report, but only if it was started for the live
    /// session generation. Returns whether the report was accepted; a stale
    /// result (the session was reset meanwhile) is discarded.
    pub fn resolve_explanation(&mut self, generation: u64, text: String) -> bool {
        if generation != self.generation {
            return false;
        }
        self.explanation = Explanation::Ready(text);
        true
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current clamped score.
    pub fn score(&self) -> i32 {
        self.score
    }

    /// The answer history, in turn order.
    pub fn history(&self) -> &[AnswerRecord] {
        &self.history
    }

    /// The current turn, if questions are in progress.
    pub fn current_turn(&self) -> Option<&Turn> {
        self.current_turn.and_then(|id| self.bank.get(id))
    }

    /// The current turn's choices in display order. Empty outside play.
    pub fn display_choices(&self) -> &[Choice] {
        &self.display
    }

    /// The ending explanation slot.
    pub fn explanation(&self) -> &Explanation {
        &self.explanation
    }

    /// Tag for the current playthrough; bumped by every reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The shared question bank.
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// The final verdict, present only once the session has ended.
    pub fn verdict(&self) -> Option<Verdict> {
        match self.phase {
            Phase::Ended => Some(Verdict::from_score(self.score)),
            _ => None,
        }
    }
}
