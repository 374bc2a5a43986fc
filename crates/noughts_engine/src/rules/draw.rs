//! Draw detection logic for noughts and crosses.

use super::super::types::Board;
use tracing::instrument;

/// Checks if the board is full (every cell marked).
///
/// A full board with no line for the mover is a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}
