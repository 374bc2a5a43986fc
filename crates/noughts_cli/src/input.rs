//! Parsing of typed session commands.

use derive_more::{Display, Error};
use std::str::FromStr;

/// One line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play at `(row, column)`.
    Play {
        /// Row index.
        row: usize,
        /// Column index.
        column: usize,
    },
    /// Start over with an empty board.
    Reset,
    /// Show the board and whose turn it is.
    Board,
    /// End the session.
    Quit,
}

/// Input line that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("unrecognized command: {input:?}")]
pub struct ParseCommandError {
    /// The offending input, trimmed.
    pub input: String,
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        let unrecognized = || ParseCommandError {
            input: line.to_string(),
        };

        match line.to_ascii_lowercase().as_str() {
            "reset" | "start over" | "restart" => return Ok(Command::Reset),
            "board" | "show" => return Ok(Command::Board),
            "quit" | "exit" | "q" => return Ok(Command::Quit),
            _ => {}
        }

        let parts: Vec<&str> = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();

        match parts.as_slice() {
            [row, column] => {
                let row = row.parse().map_err(|_| unrecognized())?;
                let column = column.parse().map_err(|_| unrecognized())?;
                Ok(Command::Play { row, column })
            }
            _ => Err(unrecognized()),
        }
    }
}

/// Parses a line, returning `None` for blank lines and `#` comments.
pub fn parse_line(line: &str) -> Option<Result<Command, ParseCommandError>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        None
    } else {
        Some(trimmed.parse())
    }
}
