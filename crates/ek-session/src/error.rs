//! Error types for session actions.

use thiserror::Error;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors a session action can produce.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// `begin` is only valid from the intro phase.
    #[error("session already begun")]
    AlreadyBegun,

    /// `answer` is only valid while questions are in progress.
    #[error("no question in progress")]
    NotInProgress,

    /// The chosen display ordinal is outside 1..=4.
    #[error("invalid choice ordinal: {0}")]
    InvalidOrdinal(usize),

    /// The current turn id has no match in the bank. Defensive: a validated
    /// bank never produces this during normal play.
    #[error("turn not found: {0}")]
    TurnNotFound(u32),
}
