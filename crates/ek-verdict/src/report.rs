//! The structured report format contract.
//!
//! A conforming report is a single text blob containing exactly eleven
//! labeled sections, in order: `Q1:` through `Q10:`, then `Overall:`. Each
//! label sits at the start of a line; a section runs until the next label.
//! Validation is purely structural (label presence and order), never
//! semantic: content correctness is the generation process's concern.

use ek_core::bank::TOTAL_TURNS;

/// The required labels, in order.
pub fn section_labels() -> Vec<String> {
    let mut labels: Vec<String> = (1..=TOTAL_TURNS).map(|k| format!("Q{k}:")).collect();
    labels.push("Overall:".to_string());
    labels
}

/// Parse a line's leading label, if it carries a known one.
///
/// Returns the zero-based index into [`section_labels`]: `Q1:` is 0,
/// `Overall:` is `TOTAL_TURNS`. Lines without a known label, including
/// out-of-range ones like `Q11:`, return `None`.
fn leading_label(line: &str) -> Option<usize> {
    let line = line.trim_start();
    if line.starts_with("Overall:") {
        return Some(TOTAL_TURNS as usize);
    }
    let rest = line.strip_prefix('Q')?;
    let colon = rest.find(':')?;
    let k: u32 = rest[..colon].parse().ok()?;
    if (1..=TOTAL_TURNS).contains(&k) {
        Some(k as usize - 1)
    } else {
        None
    }
}

/// Whether `text` conforms to the structured report format.
///
/// The labels must each appear exactly once, at line starts, in order. Text
/// before the first label or between sections is tolerated: only label
/// presence and order are checked.
pub fn is_well_formed(text: &str) -> bool {
    let found: Vec<usize> = text.lines().filter_map(leading_label).collect();
    let expected: Vec<usize> = (0..=TOTAL_TURNS as usize).collect();
    found == expected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conforming() -> String {
        let mut text = String::new();
        for k in 1..=TOTAL_TURNS {
            text.push_str(&format!("Q{k}: You said a thing about question {k}.\n"));
        }
        text.push_str("Overall: Earth holds its breath.\n");
        text
    }

    #[test]
    fn eleven_labels() {
        let labels = section_labels();
        assert_eq!(labels.len(), 11);
        assert_eq!(labels[0], "Q1:");
        assert_eq!(labels[9], "Q10:");
        assert_eq!(labels[10], "Overall:");
    }

    #[test]
    fn accepts_conforming_text() {
        assert!(is_well_formed(&conforming()));
    }

    #[test]
    fn accepts_multiline_sections_and_preamble() {
        let mut text = String::from("Here is my assessment.\n\n");
        for k in 1..=TOTAL_TURNS {
            text.push_str(&format!("Q{k}: First line.\nSecond line of the section.\n\n"));
        }
        text.push_str("Overall: Summed up.\n");
        assert!(is_well_formed(&text));
    }

    #[test]
    fn rejects_missing_section() {
        let text = conforming().replace("Q7:", "Question seven:");
        assert!(!is_well_formed(&text));
    }

    #[test]
    fn rejects_out_of_order_sections() {
        let text = conforming().replace("Q3:", "Q9:");
        assert!(!is_well_formed(&text));
    }

    #[test]
    fn rejects_duplicate_overall() {
        let mut text = conforming();
        text.push_str("Overall: again.\n");
        assert!(!is_well_formed(&text));
    }

    #[test]
    fn rejects_missing_overall() {
        let text = conforming().replace("Overall:", "Summary:");
        assert!(!is_well_formed(&text));
    }

    #[test]
    fn q1_prefix_does_not_match_q10() {
        // A naive prefix check would read "Q10:" as "Q1" + "0:".
        let mut text = conforming();
        text = text.replace("Q10:", "Q1:");
        assert!(!is_well_formed(&text));
    }

    #[test]
    fn rejects_unknown_label_numbers() {
        let text = conforming().replace("Q10:", "Q11:");
        assert!(!is_well_formed(&text));
    }

    #[test]
    fn rejects_empty_and_junk() {
        assert!(!is_well_formed(""));
        assert!(!is_well_formed("The model apologizes and refuses."));
    }

    #[test]
    fn labels_must_start_lines() {
        // All labels crammed into one line leaves ten of them mid-line.
        let mut text = String::new();
        for label in section_labels() {
            text.push_str(&format!("{label} x "));
        }
        assert!(!is_well_formed(&text));
    }
}
