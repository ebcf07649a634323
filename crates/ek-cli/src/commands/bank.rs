//! Validate and list the built-in question bank.

use comfy_table::{ContentArrangement, Table};

use ek_core::{OutcomeClass, QuestionBank};

pub fn run() -> Result<(), String> {
    // Rebuilding through the validator exercises every authoring invariant.
    let bank = QuestionBank::standard();
    let turns: Vec<_> = bank.turns().cloned().collect();
    let bank = QuestionBank::new(turns).map_err(|e| format!("bank validation failed: {e}"))?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Turn", "Prompt", "Favorable", "Unfavorable", "Next"]);

    for turn in bank.turns() {
        let prompt = if turn.prompt.len() > 60 {
            let cut = turn
                .prompt
                .char_indices()
                .take_while(|(i, _)| *i < 57)
                .map(|(i, c)| i + c.len_utf8())
                .last()
                .unwrap_or(0);
            format!("{}...", &turn.prompt[..cut])
        } else {
            turn.prompt.clone()
        };

        let favorable = turn
            .choices
            .iter()
            .filter(|c| c.outcome == OutcomeClass::Favorable)
            .count();
        let unfavorable = turn.choices.len() - favorable;

        let next = match (turn.next_favorable, turn.next_unfavorable) {
            (None, None) => "end".to_string(),
            (f, u) if f == u => f.map_or("end".to_string(), |id| id.to_string()),
            (f, u) => format!(
                "{}/{}",
                f.map_or("end".to_string(), |id| id.to_string()),
                u.map_or("end".to_string(), |id| id.to_string())
            ),
        };

        table.add_row(vec![
            turn.id.to_string(),
            prompt,
            favorable.to_string(),
            unfavorable.to_string(),
            next,
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} turns, all invariants hold", bank.len());

    Ok(())
}
