//! Error types for the core data model.

use thiserror::Error;

/// Result type for question-bank construction.
pub type BankResult<T> = Result<T, BankError>;

/// Authoring defects detected when a question bank is loaded.
///
/// These indicate a broken static bank, not a runtime condition: a valid
/// bank never produces them, so callers treat them as fatal at startup.
#[derive(Debug, Error)]
pub enum BankError {
    /// The bank contains no turns.
    #[error("question bank is empty")]
    Empty,

    /// Turn ids must run 1..=N in order.
    #[error("turn ids must be sequential: expected {expected}, found {found}")]
    NonSequentialId {
        /// The id that was expected at this position.
        expected: u32,
        /// The id actually found.
        found: u32,
    },

    /// Every turn carries exactly four choices.
    #[error("turn {turn} has {count} choices, expected {expected}")]
    WrongChoiceCount {
        /// Offending turn id.
        turn: u32,
        /// Number of choices found.
        count: usize,
        /// Required number of choices.
        expected: usize,
    },

    /// A choice's delta disagrees with its outcome class.
    #[error("turn {turn}, choice {choice}: delta {delta} disagrees with outcome {outcome}")]
    DeltaMismatch {
        /// Offending turn id.
        turn: u32,
        /// Zero-based choice index within the turn.
        choice: usize,
        /// The delta as authored.
        delta: i32,
        /// The outcome class as authored.
        outcome: String,
    },

    /// A successor id points at a turn that does not exist.
    #[error("turn {turn} references missing successor turn {next}")]
    DanglingNext {
        /// Offending turn id.
        turn: u32,
        /// The missing successor id.
        next: u32,
    },
}
