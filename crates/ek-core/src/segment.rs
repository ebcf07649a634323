//! Segmentation of prompt text into narration and quoted speech.
//!
//! Prompts interleave stage narration with the emissary's spoken lines,
//! marked by double quotes. Presentation layers render the two differently,
//! and the synthesizer strips the distinction when building prompts, so the
//! split lives here as one small pure function.

use serde::{Deserialize, Serialize};

/// One run of prompt text, either narration or spoken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// The text of the run, without the quote delimiters.
    pub text: String,
    /// True when the run is a quoted speech span.
    pub speech: bool,
}

impl Segment {
    fn narration(text: &str) -> Self {
        Self {
            text: text.to_string(),
            speech: false,
        }
    }

    fn speech(text: &str) -> Self {
        Self {
            text: text.to_string(),
            speech: true,
        }
    }
}

/// Split raw prompt text into an ordered list of narration and speech runs.
///
/// Double quotes delimit speech and are not part of any segment. An
/// unterminated quote treats the remainder of the text as speech. Empty runs
/// (adjacent quotes, leading/trailing quotes) are dropped.
pub fn segment_prompt(raw: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    for (i, chunk) in raw.split('"').enumerate() {
        if chunk.is_empty() {
            continue;
        }
        // Chunks alternate: even indices are narration, odd are speech.
        if i % 2 == 0 {
            segments.push(Segment::narration(chunk));
        } else {
            segments.push(Segment::speech(chunk));
        }
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_narration() {
        let segs = segment_prompt("The craft settles without a sound.");
        assert_eq!(segs.len(), 1);
        assert!(!segs[0].speech);
    }

    #[test]
    fn narration_then_speech() {
        let segs = segment_prompt("A seam of light opens. \"Why you?\"");
        assert_eq!(
            segs,
            vec![
                Segment::narration("A seam of light opens. "),
                Segment::speech("Why you?"),
            ]
        );
    }

    #[test]
    fn speech_sandwiched_in_narration() {
        let segs = segment_prompt("It says \"explain\" and waits.");
        assert_eq!(segs.len(), 3);
        assert!(!segs[0].speech);
        assert!(segs[1].speech);
        assert_eq!(segs[1].text, "explain");
        assert!(!segs[2].speech);
    }

    #[test]
    fn unterminated_quote_is_speech() {
        let segs = segment_prompt("The chime sounds. \"Last question");
        assert_eq!(segs.last().map(|s| s.speech), Some(true));
        assert_eq!(segs.last().map(|s| s.text.as_str()), Some("Last question"));
    }

    #[test]
    fn empty_spans_dropped() {
        let segs = segment_prompt("\"\"\"Only this.\"");
        assert_eq!(segs.len(), 1);
        assert!(segs[0].speech);
        assert_eq!(segs[0].text, "Only this.");
    }

    #[test]
    fn empty_input() {
        assert!(segment_prompt("").is_empty());
    }

    #[test]
    fn whole_standard_bank_segments() {
        // Every built-in prompt should contain at least one speech span.
        let bank = crate::QuestionBank::standard();
        for turn in bank.turns() {
            let segs = segment_prompt(&turn.prompt);
            assert!(
                segs.iter().any(|s| s.speech),
                "turn {} has no speech span",
                turn.id
            );
        }
    }
}
