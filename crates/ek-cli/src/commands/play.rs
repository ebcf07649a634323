//! Play a full interrogation in the terminal.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use ek_core::{QuestionBank, Turn, segment_prompt};
use ek_session::{AnswerRecord, Phase, Session, SessionConfig};
use ek_verdict::Synthesizer;

use crate::presentation::{Cue, CueTracker, cue_for, ending_path, portrait_path, score_to_mood};

pub fn run(seed: Option<u64>, offline: bool) -> Result<(), String> {
    let bank = Arc::new(QuestionBank::standard());
    let config = match seed {
        Some(s) => SessionConfig::default().with_seed(s),
        None => SessionConfig::default(),
    };
    let mut session = Session::new(Arc::clone(&bank), config);

    let synthesizer = if offline {
        Synthesizer::offline()
    } else {
        Synthesizer::from_env()
    };
    if !synthesizer.is_online() && !offline {
        println!(
            "{}",
            "  (no EK_API_KEY configured; the debrief will be generated offline)".dimmed()
        );
    }

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut cues = CueTracker::new();

    loop {
        play_once(&mut session, &mut reader, &mut cues, &synthesizer)?;

        print!("\n  Play again? [y/N] ");
        io::stdout().flush().map_err(|e| e.to_string())?;
        let input = read_line(&mut reader)?;
        match input.as_deref() {
            Some(line) if line.eq_ignore_ascii_case("y") => session.reset(),
            _ => break,
        }
    }

    Ok(())
}

/// One playthrough: intro, ten questions, ending and debrief.
fn play_once(
    session: &mut Session,
    reader: &mut impl BufRead,
    cues: &mut CueTracker,
    synthesizer: &Synthesizer,
) -> Result<(), String> {
    play_cue(cues, cue_for(session.phase(), None, None));
    println!();
    println!("  {}", "ERSTKONTAKT".bold());
    println!("  A craft has landed. Its emissary has ten questions.");
    println!("  Earth's fate rides on your answers. Press Enter to step forward.");

    if read_line(reader)?.is_none() {
        return Ok(()); // EOF at the intro: nothing to do
    }
    session.begin().map_err(|e| e.to_string())?;

    while session.phase() == Phase::InProgress {
        let Some(turn) = session.current_turn() else {
            break;
        };
        let turn_id = turn.id;
        play_cue(cues, cue_for(session.phase(), Some(turn_id), None));
        render_turn(session, turn_id);

        print!("  Your answer [1-4, or q to give up]: ");
        io::stdout().flush().map_err(|e| e.to_string())?;
        let Some(input) = read_line(reader)? else {
            return Ok(()); // EOF mid-game
        };
        let input = input.trim().to_string();

        if input.eq_ignore_ascii_case("q") {
            println!("  You step back from the light. The emissary does not follow.");
            return Ok(());
        }

        match input.parse::<usize>() {
            Ok(ordinal) => {
                if let Err(e) = session.answer(ordinal) {
                    println!("  {}", e.to_string().yellow());
                }
            }
            Err(_) => {
                println!("  {}", format!("not an option: {input}").yellow());
            }
        }
    }

    if session.phase() == Phase::Ended {
        render_ending(session, cues, synthesizer)?;
    }
    Ok(())
}

/// Print the HUD, the emissary's demeanor, the prompt, and the choices.
fn render_turn(session: &Session, turn_id: u32) {
    let total = session.bank().len();
    let score = session.score();

    println!();
    println!(
        "  {}    {}",
        format!("Question {turn_id}/{total}").bold(),
        format!("Regard: {score:+}").dimmed()
    );
    println!("  {}", score_to_mood(score).stage_direction().dimmed());
    println!(
        "  {}",
        format!("[portrait: {}]", portrait_path(turn_id, score)).dimmed()
    );
    println!();

    if let Some(turn) = session.current_turn() {
        print_prompt(turn);
    }

    println!();
    for (i, choice) in session.display_choices().iter().enumerate() {
        println!("    [{}] {}", i + 1, choice.text);
    }
    println!();
}

/// Render the prompt with speech spans distinct from narration.
fn print_prompt(turn: &Turn) {
    print!("  ");
    for segment in segment_prompt(&turn.prompt) {
        if segment.speech {
            print!("{}", format!("\u{201c}{}\u{201d}", segment.text).cyan().bold());
        } else {
            print!("{}", segment.text);
        }
    }
    println!();
}

/// The ending screen: verdict, recap table, and the synthesized debrief.
fn render_ending(
    session: &mut Session,
    cues: &mut CueTracker,
    synthesizer: &Synthesizer,
) -> Result<(), String> {
    let verdict = session
        .verdict()
        .ok_or_else(|| "session ended without a verdict".to_string())?;

    play_cue(cues, cue_for(Phase::Ended, None, Some(verdict)));
    println!();
    if verdict.spared() {
        println!("  {}", verdict.to_string().to_uppercase().green().bold());
    } else {
        println!("  {}", verdict.to_string().to_uppercase().red().bold());
    }
    println!("  Final regard: {:+}", session.score());
    println!("  {}", format!("[scene: {}]", ending_path(verdict)).dimmed());
    println!();
    println!("{}", recap_table(session.history()));

    session.mark_explanation_pending();
    println!();
    println!("  {}", "The emissary composes its debrief...".dimmed());

    let generation = session.generation();
    let runtime = tokio::runtime::Runtime::new().map_err(|e| e.to_string())?;
    let report = runtime.block_on(synthesizer.synthesize(
        verdict,
        session.score(),
        session.history(),
        session.bank(),
    ));

    // A reset cannot have happened on this thread, but the commit still goes
    // through the generation check like any other.
    if session.resolve_explanation(generation, report) {
        if let ek_session::Explanation::Ready(text) = session.explanation() {
            println!();
            for line in text.lines() {
                println!("  {line}");
            }
        }
    }

    Ok(())
}

/// Tabulate the answer history the way the player saw it.
fn recap_table(history: &[AnswerRecord]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Q", "Picked", "Outcome", "Delta", "Regard"]);

    for record in history {
        table.add_row(vec![
            record.turn_id.to_string(),
            format!("option {}", record.chosen_ordinal),
            record.outcome.to_string(),
            format!("{:+}", record.delta),
            format!("{} -> {}", record.score_before, record.score_after),
        ]);
    }
    table
}

/// Print the stage direction for a newly fired ambience cue, if any.
fn play_cue(cues: &mut CueTracker, cue: Cue) {
    let Some(cue) = cues.emit(cue) else {
        return;
    };
    let line = match cue {
        Cue::Intro => "[a low harmonic hum fills the air]",
        Cue::Question(_) => "[the hum shifts key]",
        Cue::EndingSafe => "[the hum resolves into a single warm chord]",
        Cue::EndingExplode => "[the hum collapses into silence]",
    };
    println!("  {}", line.dimmed().italic());
}

/// Read one line; `None` on EOF.
fn read_line(reader: &mut impl BufRead) -> Result<Option<String>, String> {
    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) => Ok(None),
        Ok(_) => Ok(Some(line.trim_end().to_string())),
        Err(e) => Err(e.to_string()),
    }
}
