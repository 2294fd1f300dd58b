//! Rewind - tic-tac-toe with time travel.

use anyhow::{Context, Result};
use clap::Parser;
use rewind_tui::{AppConfig, Cli, Command, format_snapshot, replay, run_tui};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_tui(&config),
        Command::Replay { moves, jump, json } => run_replay(&config, &moves, jump, json),
    }
}

/// Prints the position reached by a move list.
fn run_replay(config: &AppConfig, moves: &[usize], jump: Option<usize>, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    let snapshot = replay(moves, jump)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print!("{}", format_snapshot(&snapshot));
    }
    Ok(())
}
