//! Win detection logic for noughts and crosses.

use super::super::outcome::Line;
use super::super::types::{Board, Cell, Mark};
use tracing::instrument;

/// Every winning line, in the order they are scanned.
///
/// Columns come first, then rows, then the top-left diagonal, then the
/// anti-diagonal (listed bottom-left to top-right). When a move completes
/// more than one line, the first match in this order is reported.
pub const LINES: [Line; 8] = [
    // Columns
    Line::new([Cell::new(0, 0), Cell::new(1, 0), Cell::new(2, 0)]),
    Line::new([Cell::new(0, 1), Cell::new(1, 1), Cell::new(2, 1)]),
    Line::new([Cell::new(0, 2), Cell::new(1, 2), Cell::new(2, 2)]),
    // Rows
    Line::new([Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)]),
    Line::new([Cell::new(1, 0), Cell::new(1, 1), Cell::new(1, 2)]),
    Line::new([Cell::new(2, 0), Cell::new(2, 1), Cell::new(2, 2)]),
    // Diagonals
    Line::new([Cell::new(0, 0), Cell::new(1, 1), Cell::new(2, 2)]),
    Line::new([Cell::new(2, 0), Cell::new(1, 1), Cell::new(0, 2)]),
];

/// Returns the first line whose three cells all hold `mark`.
///
/// Always `None` for [`Mark::Empty`].
#[instrument(skip(board))]
pub fn winning_line(board: &Board, mark: Mark) -> Option<Line> {
    if mark.is_empty() {
        return None;
    }

    LINES
        .iter()
        .find(|line| line.cells().iter().all(|cell| board.get(*cell) == Some(mark)))
        .copied()
}
