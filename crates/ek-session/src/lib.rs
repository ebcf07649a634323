//! Session state machine for Erstkontakt.
//!
//! A [`Session`] is one playthrough: it drives the intro → questions →
//! ending phase transitions, folds each answer into the clamped score,
//! keeps the append-only answer history, and owns the generation-tagged
//! slot where the ending explanation lands once synthesized. All mutation
//! goes through discrete actions (`begin`, `answer`, `reset`) under a
//! single-writer model; the question bank is shared read-only.

/// Configuration for a session.
pub mod config;
/// Error types for session actions.
pub mod error;
/// Answer records: the append-only history entries.
pub mod record;
/// The session state machine.
pub mod session;

pub use config::SessionConfig;
pub use error::{SessionError, SessionResult};
pub use record::AnswerRecord;
pub use session::{Explanation, Phase, Session};
