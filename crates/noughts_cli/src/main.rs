//! Noughts - play noughts and crosses in the terminal.

use anyhow::Result;
use clap::Parser;
use noughts_cli::{Cli, SessionOptions, run_session};
use std::io::{self, BufRead, Cursor};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    let options = SessionOptions {
        format: cli.format,
        show_board: cli.show_board,
    };

    info!(?options, scripted = !cli.moves.is_empty(), "Starting noughts session");

    let input: Box<dyn BufRead> = if cli.moves.is_empty() {
        Box::new(io::stdin().lock())
    } else {
        Box::new(Cursor::new(cli.moves.join("\n")))
    };

    let (summary, _) = run_session(input, io::stdout().lock(), options)?;
    info!(
        accepted = summary.accepted,
        rejected = summary.rejected,
        "Done"
    );

    Ok(())
}
