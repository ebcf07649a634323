//! Prompt construction for the explanation passes.
//!
//! Both passes embed the full interrogation transcript: every turn's cleaned
//! prompt text, its four lettered choices with their +1/−1 weights, and a
//! marker on the choice the player picked, matched against the answer record
//! by normalized text equality. The repair pass additionally carries the
//! first pass's output (or a `(none)` marker) and restates the exact labels.

use ek_core::{QuestionBank, SPARED_THRESHOLD, Verdict};
use ek_session::AnswerRecord;

use crate::report::section_labels;

/// Letter labels for a turn's four choices.
const LETTERS: [char; 4] = ['A', 'B', 'C', 'D'];

/// Lowercase and collapse all whitespace runs to single spaces.
///
/// Answer text goes through presentation layers that may rewrap it, so
/// chosen-choice matching is done on this normalized form.
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Render one turn of the transcript, marking the player's choice.
fn transcript_turn(bank: &QuestionBank, history: &[AnswerRecord], turn_id: u32) -> String {
    let mut out = String::new();
    let Some(turn) = bank.get(turn_id) else {
        return out;
    };

    out.push_str(&format!("Question {turn_id}: {}\n", normalize(&turn.prompt)));

    let chosen = history
        .iter()
        .find(|r| r.turn_id == turn_id)
        .map(|r| normalize(&r.chosen_text));

    for (i, choice) in turn.choices.iter().enumerate() {
        let weight = if choice.delta > 0 { "+1" } else { "-1" };
        let marker = if chosen.as_deref() == Some(normalize(&choice.text).as_str()) {
            "  <- the player chose this"
        } else {
            ""
        };
        out.push_str(&format!(
            "  {}. ({weight}) {}{marker}\n",
            LETTERS[i.min(LETTERS.len() - 1)],
            choice.text
        ));
    }
    out
}

/// The interpretive rubric and the transcript, shared by both passes.
fn transcript(
    verdict: Verdict,
    final_score: i32,
    history: &[AnswerRecord],
    bank: &QuestionBank,
) -> String {
    let mut out = String::new();

    out.push_str(
        "An alien emissary interrogated a human to decide Earth's fate. Each answer \
         carried a hidden weight: +1 answers showed openness, honesty, or care reaching \
         beyond the player's own species; -1 answers were defensive or human-centered. \
         The final score decides the ending.\n\n",
    );
    out.push_str(&format!(
        "Final score: {final_score}. Threshold to spare Earth: {SPARED_THRESHOLD}. Outcome: {verdict}.\n\n",
    ));
    out.push_str("Transcript:\n");
    for turn in bank.turns() {
        out.push_str(&transcript_turn(bank, history, turn.id));
        out.push('\n');
    }
    out
}

/// Exact output-format instructions.
fn format_instructions() -> String {
    format!(
        "Write the emissary's debrief for the player, addressing them as \"you\". \
         Output exactly 11 sections with these labels, each starting its own line, \
         in this order: {}. Each Qk section explains how the player's answer to \
         question k was received and why it moved the score. The Overall section \
         interprets the final score and the ending. No other headings, no preamble.",
        section_labels().join(" ")
    )
}

/// Build the first-pass prompt.
pub fn first_pass_prompt(
    verdict: Verdict,
    final_score: i32,
    history: &[AnswerRecord],
    bank: &QuestionBank,
) -> String {
    format!(
        "{}{}",
        transcript(verdict, final_score, history, bank),
        format_instructions()
    )
}

/// Build the repair prompt: same transcript, plus the first pass's text (or
/// `(none)` when no usable text came back) and a terse restatement of the
/// required labels.
pub fn repair_prompt(
    verdict: Verdict,
    final_score: i32,
    history: &[AnswerRecord],
    bank: &QuestionBank,
    first_pass: Option<&str>,
) -> String {
    let previous = first_pass.unwrap_or("(none)");
    format!(
        "{}Your previous attempt did not match the required format. Previous attempt:\n\
         {previous}\n\n\
         Rewrite it. {}\n\
         Required labels, verbatim and in order: {}.",
        transcript(verdict, final_score, history, bank),
        format_instructions(),
        section_labels().join(" ")
    )
}
