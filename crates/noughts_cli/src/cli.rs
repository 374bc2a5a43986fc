//! Command-line interface for noughts.

use clap::{Parser, ValueEnum};

/// Noughts - play noughts and crosses in the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Two-player noughts and crosses on a 3x3 board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output format for game events
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, env = "NOUGHTS_FORMAT")]
    pub format: OutputFormat,

    /// Commands to run instead of reading stdin, e.g. --moves "0,0" --moves "1 1"
    #[arg(long)]
    pub moves: Vec<String>,

    /// Print the board after every accepted move (text format only)
    #[arg(long)]
    pub show_board: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

/// How events are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines
    Text,
    /// One JSON event per line
    Json,
}
