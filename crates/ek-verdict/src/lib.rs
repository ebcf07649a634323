//! Ending-explanation synthesis for Erstkontakt.
//!
//! When a session ends, the player's full answer history and final score are
//! turned into a structured prose report: eleven labeled sections, `Q1:`
//! through `Q10:` and then `Overall:`. The preferred author is an external
//! text-generation service, reached through the [`TextGenerator`] trait; its
//! output is validated structurally, repaired once on non-conformance, and
//! silently replaced by a deterministic, network-free fallback when both
//! attempts fail. The synthesizer never surfaces an error: the worst case is
//! fallback prose in the same format.

/// External completion client: the `complete(prompt, temperature)` port.
pub mod client;
/// Deterministic, format-guaranteed fallback report.
pub mod fallback;
/// Prompt construction for the first pass and the repair pass.
pub mod prompt;
/// The structured report format contract and its validator.
pub mod report;
/// The generate → validate → repair → fallback pipeline.
pub mod synthesizer;

pub use client::{OpenAiClient, TextGenerator};
pub use fallback::fallback_report;
pub use report::{is_well_formed, section_labels};
pub use synthesizer::{FIRST_PASS_TEMPERATURE, REPAIR_TEMPERATURE, Synthesizer};
