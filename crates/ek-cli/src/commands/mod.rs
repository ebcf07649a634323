//! `ek` subcommand implementations.

pub mod bank;
pub mod play;
