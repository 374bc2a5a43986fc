//! Console observer: renders engine notifications as output lines.

use crate::cli::OutputFormat;
use noughts_engine::{
    BOARD_SIZE, Cell, GameEvent, GameObserver, GameResult, Mark, MoveError, Player,
};
use std::io::{self, Write};
use tracing::warn;

/// Writes every engine notification to `out`.
///
/// Keeps its own copy of the grid, updated from `on_moved`, the way a visual
/// front end would. Write failures cannot be returned from a callback, so the
/// first one is held until [`ConsoleObserver::take_error`] is called.
#[derive(Debug)]
pub struct ConsoleObserver<W: Write> {
    out: W,
    format: OutputFormat,
    show_board: bool,
    grid: [[Mark; BOARD_SIZE]; BOARD_SIZE],
    error: Option<io::Error>,
}

impl<W: Write> ConsoleObserver<W> {
    /// Creates an observer writing to `out`.
    pub fn new(out: W, format: OutputFormat, show_board: bool) -> Self {
        Self {
            out,
            format,
            show_board,
            grid: Default::default(),
            error: None,
        }
    }

    /// Returns the first write error since the last call, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    /// Blanks the mirrored grid.
    pub fn clear(&mut self) {
        self.grid = Default::default();
    }

    /// Consumes the observer and returns its writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Renders the mirrored grid.
    pub fn render_grid(&self) -> String {
        self.grid
            .iter()
            .map(|row| {
                row.iter()
                    .map(|mark| mark.to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Writes the grid followed by whose turn it is (text format only).
    pub fn print_board(&mut self, turn: Player, finished: bool) {
        if self.format != OutputFormat::Text {
            return;
        }
        let status = if finished {
            "Game over".to_string()
        } else {
            format!("{turn} ({}) to move", turn.mark())
        };
        let text = format!("{}\n{status}", self.render_grid());
        self.write_line(&text);
    }

    /// Writes a free-form notice (text format only).
    pub fn notice(&mut self, message: &str) {
        if self.format == OutputFormat::Text {
            self.write_line(message);
        }
    }

    fn emit(&mut self, event: GameEvent, text: String) {
        match self.format {
            OutputFormat::Text => self.write_line(&text),
            OutputFormat::Json => match serde_json::to_string(&event) {
                Ok(json) => self.write_line(&json),
                Err(e) => warn!(error = %e, "Failed to serialize event"),
            },
        }
    }

    fn write_line(&mut self, line: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = writeln!(self.out, "{line}") {
            warn!(error = %e, "Failed to write output");
            self.error = Some(e);
        }
    }
}

impl<W: Write> GameObserver for ConsoleObserver<W> {
    fn on_moved(&mut self, row: usize, column: usize, player: Player, mark: Mark) {
        if let Some(slot) = self.grid.get_mut(row).and_then(|r| r.get_mut(column)) {
            *slot = mark;
        }
        let text = format!("{player} ({mark}) played row {row}, column {column}");
        self.emit(
            GameEvent::Moved {
                cell: Cell::new(row, column),
                player,
                mark,
            },
            text,
        );
        if self.show_board && self.format == OutputFormat::Text {
            let grid = self.render_grid();
            self.write_line(&grid);
        }
    }

    fn on_game_over(&mut self, result: &GameResult) {
        self.emit(
            GameEvent::GameOver { result: *result },
            format!("Game over: {result}"),
        );
    }

    fn on_rejected(&mut self, row: usize, column: usize, reason: &MoveError) {
        self.emit(
            GameEvent::Rejected {
                cell: Cell::new(row, column),
                reason: *reason,
            },
            format!("Error: Invalid move at row {row}, column {column} ({reason})"),
        );
    }
}
