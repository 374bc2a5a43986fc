//! Outbound notifications from the engine.
//!
//! The engine reports everything it does through a [`GameObserver`]. Calls
//! are synchronous and happen on the caller's thread, inside `play`.

use super::action::MoveError;
use super::outcome::GameResult;
use super::types::{Cell, Mark, Player};
use serde::{Deserialize, Serialize};

/// Receives engine notifications.
///
/// For one `play` call the engine delivers either a single `on_rejected`, or
/// `on_moved` optionally followed by `on_game_over`. `on_moved` always comes
/// first.
pub trait GameObserver {
    /// A cell was filled with `mark` by `player`.
    fn on_moved(&mut self, row: usize, column: usize, player: Player, mark: Mark);

    /// The game reached a terminal result.
    fn on_game_over(&mut self, result: &GameResult);

    /// The move at `(row, column)` was refused and nothing changed.
    fn on_rejected(&mut self, row: usize, column: usize, reason: &MoveError);
}

/// Lets a caller keep its observer and lend the engine a mutable borrow.
impl<O: GameObserver + ?Sized> GameObserver for &mut O {
    fn on_moved(&mut self, row: usize, column: usize, player: Player, mark: Mark) {
        (**self).on_moved(row, column, player, mark);
    }

    fn on_game_over(&mut self, result: &GameResult) {
        (**self).on_game_over(result);
    }

    fn on_rejected(&mut self, row: usize, column: usize, reason: &MoveError) {
        (**self).on_rejected(row, column, reason);
    }
}

/// One observer notification as data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// See [`GameObserver::on_moved`].
    Moved {
        /// The filled cell.
        cell: Cell,
        /// Who moved.
        player: Player,
        /// What was written.
        mark: Mark,
    },
    /// See [`GameObserver::on_game_over`].
    GameOver {
        /// The declared result.
        result: GameResult,
    },
    /// See [`GameObserver::on_rejected`].
    Rejected {
        /// The requested cell.
        cell: Cell,
        /// Why it was refused.
        reason: MoveError,
    },
}

/// Observer that records every notification in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events, oldest first.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Returns the most recent event.
    pub fn last(&self) -> Option<&GameEvent> {
        self.events.last()
    }

    /// Removes and returns all recorded events.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Returns the results of every `GameOver` event.
    pub fn results(&self) -> Vec<GameResult> {
        self.events
            .iter()
            .filter_map(|event| match event {
                GameEvent::GameOver { result } => Some(*result),
                _ => None,
            })
            .collect()
    }

    /// Returns the reasons of every `Rejected` event.
    pub fn rejections(&self) -> Vec<(Cell, MoveError)> {
        self.events
            .iter()
            .filter_map(|event| match event {
                GameEvent::Rejected { cell, reason } => Some((*cell, *reason)),
                _ => None,
            })
            .collect()
    }
}

impl GameObserver for EventLog {
    fn on_moved(&mut self, row: usize, column: usize, player: Player, mark: Mark) {
        self.events.push(GameEvent::Moved {
            cell: Cell::new(row, column),
            player,
            mark,
        });
    }

    fn on_game_over(&mut self, result: &GameResult) {
        self.events.push(GameEvent::GameOver { result: *result });
    }

    fn on_rejected(&mut self, row: usize, column: usize, reason: &MoveError) {
        self.events.push(GameEvent::Rejected {
            cell: Cell::new(row, column),
            reason: *reason,
        });
    }
}
