//! Read-eval loop driving one engine from typed commands.

use crate::cli::OutputFormat;
use crate::console::ConsoleObserver;
use crate::input::{Command, parse_line};
use anyhow::{Context, Result};
use noughts_engine::{GameEngine, GameResult, GameStatus};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// Counters for a finished session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Moves the engine accepted.
    pub accepted: usize,
    /// Moves the engine rejected.
    pub rejected: usize,
    /// Lines that were not commands.
    pub unrecognized: usize,
    /// Results declared, across resets.
    pub results: Vec<GameResult>,
}

/// Options for [`run_session`].
#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
    /// Output format.
    pub format: OutputFormat,
    /// Print the board after each accepted move.
    pub show_board: bool,
}

/// Runs commands from `input` until it ends or a quit command arrives,
/// writing engine notifications to `output`.
///
/// # Errors
///
/// Fails when reading `input` or writing `output` fails.
#[instrument(skip(input, output))]
pub fn run_session<R: BufRead, W: Write>(
    input: R,
    output: W,
    options: SessionOptions,
) -> Result<(SessionSummary, W)> {
    let console = ConsoleObserver::new(output, options.format, options.show_board);
    let mut engine = GameEngine::new(console);
    let mut summary = SessionSummary::default();

    let turn = engine.current_turn();
    engine.observer_mut().print_board(turn, false);
    if let Some(e) = engine.observer_mut().take_error() {
        return Err(e).context("Failed to write output");
    }

    for line in input.lines() {
        let line = line.context("Failed to read command")?;
        let Some(parsed) = parse_line(&line) else {
            continue;
        };

        match parsed {
            Ok(Command::Play { row, column }) => match engine.play(row, column) {
                Ok(status) => {
                    summary.accepted += 1;
                    if let GameStatus::Finished(result) = status {
                        summary.results.push(result);
                    }
                }
                Err(reason) => {
                    debug!(%reason, "Move rejected by engine");
                    summary.rejected += 1;
                }
            },
            Ok(Command::Reset) => {
                engine.reset();
                let turn = engine.current_turn();
                let console = engine.observer_mut();
                console.clear();
                console.notice("New game");
                console.print_board(turn, false);
            }
            Ok(Command::Board) => {
                let turn = engine.current_turn();
                let finished = engine.is_finished();
                engine.observer_mut().print_board(turn, finished);
            }
            Ok(Command::Quit) => break,
            Err(e) => {
                summary.unrecognized += 1;
                engine.observer_mut().notice(&format!("Error: {e}"));
            }
        }

        if let Some(e) = engine.observer_mut().take_error() {
            return Err(e).context("Failed to write output");
        }
    }

    info!(
        accepted = summary.accepted,
        rejected = summary.rejected,
        games = summary.results.len(),
        "Session ended"
    );

    let mut output = engine.into_observer().into_inner();
    output.flush().context("Failed to flush output")?;
    Ok((summary, output))
}
