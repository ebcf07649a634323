//! Core types for Erstkontakt: a fixed-length, branching first-contact quiz.
//!
//! This crate defines the static data model (the question bank with its
//! load-time invariants) and the pure leaves of the engine: the clamped
//! scoring accumulator, the unbiased choice shuffle, and the segmentation of
//! prompt text into narration and quoted speech. It has no session state and
//! no I/O; you can construct a [`QuestionBank`] programmatically or
//! deserialize one from JSON.

/// Question bank: turns, choices, and load-time validation.
pub mod bank;
/// Error types used throughout the crate.
pub mod error;
/// Clamped scoring accumulator and the final verdict.
pub mod score;
/// Narration/speech segmentation of prompt text.
pub mod segment;
/// Unbiased permutation of a turn's choices.
pub mod shuffle;

/// Re-export bank types.
pub use bank::{Choice, OutcomeClass, QuestionBank, Turn};
/// Re-export error types.
pub use error::{BankError, BankResult};
/// Re-export scoring types.
pub use score::{SCORE_MAX, SCORE_MIN, SPARED_THRESHOLD, Verdict, apply_delta};
/// Re-export segmentation types.
pub use segment::{Segment, segment_prompt};
/// Re-export the shuffle utility.
pub use shuffle::shuffled;
