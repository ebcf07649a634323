//! The generate → validate → repair → fallback pipeline.

use ek_core::{QuestionBank, Verdict};
use ek_session::AnswerRecord;

use crate::client::{OpenAiClient, TextGenerator};
use crate::fallback::fallback_report;
use crate::prompt::{first_pass_prompt, repair_prompt};
use crate::report::is_well_formed;

/// Sampling temperature for the first pass: low but nonzero.
pub const FIRST_PASS_TEMPERATURE: f32 = 0.4;

/// Sampling temperature for the repair pass.
pub const REPAIR_TEMPERATURE: f32 = 0.2;

/// Produces the ending explanation when a session ends.
///
/// With a configured generator it makes at most two external calls: a first
/// pass, then a single repair attempt if the first pass fails or returns
/// non-conforming text. Without one, or when both passes fail, it emits the
/// deterministic fallback. Synthesis never returns an error to its caller;
/// every result satisfies the structured report format.
pub struct Synthesizer {
    generator: Option<Box<dyn TextGenerator>>,
}

impl Synthesizer {
    /// A synthesizer backed by the given generator.
    pub fn new(generator: Box<dyn TextGenerator>) -> Self {
        Self {
            generator: Some(generator),
        }
    }

    /// A synthesizer with no external capability: always the fallback.
    pub fn offline() -> Self {
        Self { generator: None }
    }

    /// Build from the environment: offline when no API key is configured.
    pub fn from_env() -> Self {
        match OpenAiClient::from_env() {
            Some(client) => Self::new(Box::new(client)),
            None => Self::offline(),
        }
    }

    /// Whether an external generator is configured.
    pub fn is_online(&self) -> bool {
        self.generator.is_some()
    }

    /// Synthesize the ending explanation.
    ///
    /// `history` is the session's full answer log; `bank` supplies each
    /// turn's choice set and weights for the prompt.
    pub async fn synthesize(
        &self,
        verdict: Verdict,
        final_score: i32,
        history: &[AnswerRecord],
        bank: &QuestionBank,
    ) -> String {
        let Some(generator) = &self.generator else {
            tracing::debug!("no generator configured, using fallback report");
            return fallback_report(verdict, final_score, history);
        };

        let prompt = first_pass_prompt(verdict, final_score, history, bank);
        let first = generator.complete(&prompt, FIRST_PASS_TEMPERATURE).await;

        match &first {
            Some(text) if is_well_formed(text) => {
                tracing::debug!("first pass conformed");
                return text.clone();
            }
            Some(_) => tracing::warn!("first pass text non-conforming, repairing"),
            None => tracing::warn!("first pass produced no usable text, repairing"),
        }

        let prompt = repair_prompt(verdict, final_score, history, bank, first.as_deref());
        let repaired = generator
            .complete(&prompt, REPAIR_TEMPERATURE)
            .await
            .filter(|text| is_well_formed(text));
        if let Some(text) = repaired {
            tracing::debug!("repair pass conformed");
            return text;
        }

        tracing::warn!("both passes failed, using fallback report");
        fallback_report(verdict, final_score, history)
    }
}
