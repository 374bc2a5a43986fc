//! Monotonic board invariant: cells never change once marked.

use super::super::{Board, GameState};
use super::Invariant;

/// Invariant: cells are written at most once.
///
/// Replaying the history onto an empty board must never hit a marked cell
/// and must reproduce the current board exactly.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(state: &GameState) -> bool {
        let mut reconstructed = Board::new();

        for mov in state.history() {
            if !reconstructed.is_empty(*mov.cell()) {
                return false;
            }
            reconstructed.set(*mov.cell(), *mov.mark());
        }

        reconstructed == *state.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, EventLog, GameEngine, Mark, Move, Player};

    #[test]
    fn test_new_game_holds() {
        assert!(MonotonicBoardInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_multiple_moves_hold() {
        let mut engine = GameEngine::new(EventLog::new());
        for (row, column) in [(0, 0), (1, 1), (0, 2), (2, 0)] {
            engine.play(row, column).expect("legal move");
        }
        assert!(MonotonicBoardInvariant::holds(engine.state()));
    }

    #[test]
    fn test_overwritten_cell_violates() {
        let mut engine = GameEngine::new(EventLog::new());
        engine.play(1, 1).expect("legal move");

        let mut state = engine.state().clone();
        state.board.set(Cell::new(1, 1), Mark::Nought);
        assert!(!MonotonicBoardInvariant::holds(&state));
    }

    #[test]
    fn test_history_replaying_same_cell_violates() {
        let mut state = GameState::new();
        let cell = Cell::new(0, 0);
        state.history.push(Move::new(Player::First, cell, Mark::Cross));
        state.history.push(Move::new(Player::Second, cell, Mark::Nought));
        state.board.set(cell, Mark::Nought);
        assert!(!MonotonicBoardInvariant::holds(&state));
    }
}
