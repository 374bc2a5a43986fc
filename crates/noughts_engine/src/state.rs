//! Plain game state aggregate.

use super::action::Move;
use super::outcome::{GameResult, GameStatus};
use super::types::{Board, Cell, Player};

/// Complete game state: turn, board, declared result and accepted moves.
///
/// `GameState` is only mutated by [`GameEngine`](crate::GameEngine); it is
/// exposed read-only so invariants and callers can inspect it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) current_turn: Player,
    pub(crate) result: Option<GameResult>,
    pub(crate) history: Vec<Move>,
}

impl GameState {
    /// Creates the initial state: empty board, `First` to move, no result.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_turn: Player::First,
            result: None,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    ///
    /// Once the game is finished this stays on the player who made the
    /// final move.
    pub fn current_turn(&self) -> Player {
        self.current_turn
    }

    /// Returns the declared result, if any.
    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    /// Returns the accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        match self.result {
            Some(result) => GameStatus::Finished(result),
            None => GameStatus::InProgress,
        }
    }

    /// Returns true once a result has been declared.
    pub fn is_finished(&self) -> bool {
        self.result.is_some()
    }

    /// Returns the cells that can still be played, in row-major order.
    pub fn available_cells(&self) -> Vec<Cell> {
        if self.is_finished() {
            Vec::new()
        } else {
            self.board.empty_cells()
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
