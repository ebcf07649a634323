//! Answer records: immutable entries in the session history.

use serde::{Deserialize, Serialize};

use ek_core::OutcomeClass;

/// One completed turn, as the player saw it.
///
/// Immutable once appended. `chosen_ordinal` is the position in the shuffled
/// display (1..=4), not the canonical choice index, so a record replays the
/// screen the player actually answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    /// Id of the turn that was answered.
    pub turn_id: u32,
    /// Display position of the chosen option, 1..=4.
    pub chosen_ordinal: usize,
    /// The turn's prompt text at the time of answering.
    pub prompt_text: String,
    /// The chosen answer's text, verbatim.
    pub chosen_text: String,
    /// Outcome class of the chosen answer.
    pub outcome: OutcomeClass,
    /// Score delta the answer carried (±1).
    pub delta: i32,
    /// Score before the delta was applied.
    pub score_before: i32,
    /// Score after clamping, `clamp(score_before + delta)`.
    pub score_after: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_serde() {
        let record = AnswerRecord {
            turn_id: 3,
            chosen_ordinal: 2,
            prompt_text: "\"Explain.\"".to_string(),
            chosen_text: "We're trying.".to_string(),
            outcome: OutcomeClass::Favorable,
            delta: 1,
            score_before: 0,
            score_after: 1,
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: AnswerRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
