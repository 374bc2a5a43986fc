//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! `{P} play {Q}`. Preconditions are always checked; the engine checks
//! postconditions in debug builds.

use super::action::MoveError;
use super::invariants::{GameInvariants, InvariantSet};
use super::state::GameState;
use super::types::Cell;
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), ContractViolation>;
}

/// Postcondition failure: the transition broke one or more invariants.
///
/// This is a bug in the engine, never a consequence of caller input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractViolation {
    /// Descriptions of every violated property.
    pub violations: Vec<String>,
}

impl std::fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Postcondition failed: {}", self.violations.join("; "))
    }
}

impl std::error::Error for ContractViolation {}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: no result has been declared yet.
pub struct GameNotFinished;

impl GameNotFinished {
    /// Fails with [`MoveError::GameAlreadyFinished`] once a result exists.
    pub fn check(state: &GameState) -> Result<(), MoveError> {
        if state.is_finished() {
            Err(MoveError::GameAlreadyFinished)
        } else {
            Ok(())
        }
    }
}

/// Precondition: row and column are both on the board.
pub struct WithinBounds;

impl WithinBounds {
    /// Fails with [`MoveError::OutOfBounds`] for off-board cells.
    pub fn check(cell: &Cell) -> Result<(), MoveError> {
        if cell.is_on_board() {
            Ok(())
        } else {
            Err(MoveError::OutOfBounds { cell: *cell })
        }
    }
}

/// Precondition: the target cell carries no mark.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with [`MoveError::OccupiedCell`] for marked cells.
    pub fn check(cell: &Cell, state: &GameState) -> Result<(), MoveError> {
        if state.board().is_empty(*cell) {
            Ok(())
        } else {
            Err(MoveError::OccupiedCell { cell: *cell })
        }
    }
}

/// Composite precondition, checked in order: the game is not finished, the
/// cell is on the board, the cell is empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(state))]
    pub fn check(cell: &Cell, state: &GameState) -> Result<(), MoveError> {
        GameNotFinished::check(state)?;
        WithinBounds::check(cell)?;
        CellIsEmpty::check(cell, state)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for `play`.
///
/// Preconditions: see [`LegalMove`].
///
/// Postconditions:
/// - every cell marked before the move is unchanged
/// - every invariant in [`GameInvariants`] holds
pub struct MoveContract;

impl Contract<GameState, Cell> for MoveContract {
    fn pre(state: &GameState, action: &Cell) -> Result<(), MoveError> {
        LegalMove::check(action, state)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), ContractViolation> {
        let mut violations = Vec::new();

        let overwritten = Cell::ALL.iter().any(|cell| {
            let was = before.board().get(*cell);
            was.is_some_and(|mark| !mark.is_empty()) && after.board().get(*cell) != was
        });
        if overwritten {
            warn!("Marked cell changed during move");
            violations.push("Marked cells are never overwritten".to_string());
        }

        if let Err(broken) = GameInvariants::check_all(after) {
            warn!(count = broken.len(), "Invariant violated after move");
            violations.extend(broken.into_iter().map(|v| v.description));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ContractViolation { violations })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EventLog, GameEngine, Mark};

    #[test]
    fn test_precondition_empty_cell() {
        let state = GameState::new();
        assert!(MoveContract::pre(&state, &Cell::new(1, 1)).is_ok());
    }

    #[test]
    fn test_precondition_occupied_cell() {
        let mut engine = GameEngine::new(EventLog::new());
        engine.play(1, 1).expect("legal move");

        assert_eq!(
            MoveContract::pre(engine.state(), &Cell::new(1, 1)),
            Err(MoveError::OccupiedCell {
                cell: Cell::new(1, 1)
            })
        );
    }

    #[test]
    fn test_precondition_out_of_bounds() {
        let state = GameState::new();
        assert_eq!(
            MoveContract::pre(&state, &Cell::new(0, 3)),
            Err(MoveError::OutOfBounds {
                cell: Cell::new(0, 3)
            })
        );
    }

    #[test]
    fn test_finished_checked_before_bounds() {
        let mut engine = GameEngine::new(EventLog::new());
        for (row, column) in [(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)] {
            engine.play(row, column).expect("legal move");
        }
        assert_eq!(
            MoveContract::pre(engine.state(), &Cell::new(7, 7)),
            Err(MoveError::GameAlreadyFinished)
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let mut engine = GameEngine::new(EventLog::new());
        let before = engine.state().clone();
        engine.play(2, 2).expect("legal move");
        assert!(MoveContract::post(&before, engine.state()).is_ok());
    }

    #[test]
    fn test_postcondition_detects_overwrite() {
        let mut engine = GameEngine::new(EventLog::new());
        engine.play(0, 0).expect("legal move");
        let before = engine.state().clone();

        let mut after = before.clone();
        after.board.set(Cell::new(0, 0), Mark::Nought);

        let violation = MoveContract::post(&before, &after).unwrap_err();
        assert!(
            violation
                .violations
                .iter()
                .any(|v| v == "Marked cells are never overwritten")
        );
        assert!(violation.to_string().starts_with("Postcondition failed"));
    }
}
