//! Alternating turn invariant: players alternate First, Second, First, ...

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: players alternate turns and write their own mark.
///
/// The history starts with `First` and alternates. While the game is in
/// progress the player to move is `First` after an even number of moves and
/// `Second` after an odd number. Once finished, the turn stays with the
/// player who made the final move.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        let alternates = history.iter().enumerate().all(|(index, mov)| {
            let expected = if index % 2 == 0 {
                Player::First
            } else {
                Player::Second
            };
            *mov.player() == expected && *mov.mark() == expected.mark()
        });
        if !alternates {
            return false;
        }

        let expected_turn = match (state.is_finished(), history.last()) {
            (true, Some(last)) => *last.player(),
            (true, None) => return false,
            (false, _) if history.len() % 2 == 0 => Player::First,
            (false, _) => Player::Second,
        };

        state.current_turn() == expected_turn
    }

    fn description() -> &'static str {
        "Players alternate turns (First, Second, First, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, EventLog, GameEngine, Mark, Move};

    #[test]
    fn test_new_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_single_move_holds() {
        let mut engine = GameEngine::new(EventLog::new());
        engine.play(1, 1).expect("legal move");
        assert!(AlternatingTurnInvariant::holds(engine.state()));
        assert_eq!(engine.current_turn(), Player::Second);
    }

    #[test]
    fn test_finished_game_keeps_last_mover() {
        let mut engine = GameEngine::new(EventLog::new());
        for (row, column) in [(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)] {
            engine.play(row, column).expect("legal move");
        }
        assert!(engine.is_finished());
        assert_eq!(engine.current_turn(), Player::First);
        assert!(AlternatingTurnInvariant::holds(engine.state()));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut state = GameState::new();
        state
            .history
            .push(Move::new(Player::First, Cell::new(0, 0), Mark::Cross));
        state
            .history
            .push(Move::new(Player::First, Cell::new(1, 1), Mark::Cross));
        assert!(!AlternatingTurnInvariant::holds(&state));
    }

    #[test]
    fn test_wrong_mark_violates() {
        let mut state = GameState::new();
        state
            .history
            .push(Move::new(Player::First, Cell::new(0, 0), Mark::Nought));
        state.current_turn = Player::Second;
        assert!(!AlternatingTurnInvariant::holds(&state));
    }

    #[test]
    fn test_stale_turn_violates() {
        let mut state = GameState::new();
        state
            .history
            .push(Move::new(Player::First, Cell::new(0, 0), Mark::Cross));
        assert!(!AlternatingTurnInvariant::holds(&state));
    }
}
