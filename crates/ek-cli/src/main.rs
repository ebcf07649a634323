//! CLI frontend for the Erstkontakt interrogation.

mod commands;
mod presentation;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "ek",
    about = "Erstkontakt: an alien emissary decides Earth's fate, one question at a time",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a full interrogation in the terminal
    Play {
        /// RNG seed for reproducible option shuffles
        #[arg(short, long)]
        seed: Option<u64>,

        /// Skip the external text service and use the offline debrief
        #[arg(long)]
        offline: bool,
    },

    /// Validate and list the built-in question bank
    Bank,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play { seed, offline } => commands::play::run(seed, offline),
        Commands::Bank => commands::bank::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
