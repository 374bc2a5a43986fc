//! Accepted moves and the reasons a move can be rejected.

use super::types::{Cell, Mark, Player};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A move that the engine accepted: a player writing their mark into a cell.
///
/// Moves are recorded in order so the board can be reconstructed and
/// checked against the invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new, Getters)]
pub struct Move {
    /// The player who moved.
    player: Player,
    /// The cell that was filled.
    cell: Cell,
    /// The mark that was written.
    mark: Mark,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) -> {}", self.player, self.mark, self.cell)
    }
}

/// Reason a move was rejected.
///
/// Rejections are never fatal: the engine reports them to its observer and
/// leaves its state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum MoveError {
    /// The target cell already carries a mark.
    #[display("cell {cell} is already occupied")]
    OccupiedCell {
        /// The requested cell.
        cell: Cell,
    },

    /// A result has already been declared.
    #[display("game is already finished")]
    GameAlreadyFinished,

    /// The row or column lies outside the board.
    #[display("cell {cell} is off the board")]
    OutOfBounds {
        /// The requested cell.
        cell: Cell,
    },
}

impl std::error::Error for MoveError {}
