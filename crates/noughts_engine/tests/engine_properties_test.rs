//! Randomized properties of the engine over arbitrary move sequences.

use noughts_engine::{
    EventLog, GameEngine, GameEvent, GameInvariants, GameState, InvariantSet, Mark, MoveError,
    Player,
};
use proptest::prelude::*;

/// Coordinates mostly on the board, sometimes just off it.
fn coordinate() -> impl Strategy<Value = (usize, usize)> {
    (0usize..4, 0usize..4)
}

proptest! {
    #[test]
    fn test_turns_alternate_and_marks_match(moves in prop::collection::vec(coordinate(), 0..30)) {
        let mut engine = GameEngine::new(EventLog::new());
        let mut accepted = 0usize;

        for (row, column) in moves {
            let turn = engine.current_turn();
            if engine.play(row, column).is_ok() {
                let expected = if accepted % 2 == 0 { Player::First } else { Player::Second };
                prop_assert_eq!(turn, expected);
                prop_assert_eq!(
                    engine.history().last().map(|m| *m.mark()),
                    Some(expected.mark())
                );
                accepted += 1;
            }
        }

        prop_assert_eq!(engine.history().len(), accepted);
    }

    #[test]
    fn test_rejections_leave_state_unchanged(moves in prop::collection::vec(coordinate(), 0..30)) {
        let mut engine = GameEngine::new(EventLog::new());

        for (row, column) in moves {
            let before = engine.state().clone();
            let seen = engine.observer().events().len();

            if let Err(reason) = engine.play(row, column) {
                prop_assert_eq!(engine.state(), &before);
                let events = &engine.observer().events()[seen..];
                prop_assert_eq!(events.len(), 1);
                match &events[0] {
                    GameEvent::Rejected { cell, reason: seen_reason } => {
                        prop_assert_eq!((cell.row, cell.column), (row, column));
                        prop_assert_eq!(*seen_reason, reason);
                    }
                    other => prop_assert!(false, "expected rejection, got {:?}", other),
                }
                if before.is_finished() {
                    prop_assert_eq!(reason, MoveError::GameAlreadyFinished);
                }
            }
        }
    }

    #[test]
    fn test_invariants_hold_and_game_over_fires_once(moves in prop::collection::vec(coordinate(), 0..30)) {
        let mut engine = GameEngine::new(EventLog::new());

        for (row, column) in moves {
            let _ = engine.play(row, column);
            prop_assert!(GameInvariants::check_all(engine.state()).is_ok());
        }

        let results = engine.observer().results();
        prop_assert!(results.len() <= 1);
        prop_assert_eq!(results.first(), engine.result());
        prop_assert!(engine.board().count(Mark::Cross) >= engine.board().count(Mark::Nought));
    }

    #[test]
    fn test_reset_is_idempotent(
        moves in prop::collection::vec(coordinate(), 0..20),
        resets in 1usize..4,
    ) {
        let mut engine = GameEngine::new(EventLog::new());
        for (row, column) in moves {
            let _ = engine.play(row, column);
        }

        for _ in 0..resets {
            engine.reset();
            prop_assert_eq!(engine.state(), &GameState::new());
        }
    }
}
