//! History consistency invariant: history length matches marked cells.

use super::super::{GameState, Mark};
use super::Invariant;

/// Invariant: every accepted move corresponds to exactly one marked cell.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let marked = state.board().count(Mark::Cross) + state.board().count(Mark::Nought);
        state.history().len() == marked
    }

    fn description() -> &'static str {
        "History length matches number of marked cells"
    }
}
