//! The game engine: board and turn state machine with observer callbacks.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::observer::GameObserver;
use super::outcome::{GameResult, GameStatus};
use super::rules;
use super::state::GameState;
use super::types::{Board, Cell, Player};
use tracing::{debug, info, instrument};

/// Noughts-and-crosses engine.
///
/// Owns the board and turn state, accepts moves through [`play`], and
/// reports every outcome to its observer. The engine is either in progress
/// (no result) or finished (a result was declared); only [`reset`] leaves the
/// finished state.
///
/// The observer can be owned by the engine or lent to it as `&mut O`.
///
/// [`play`]: GameEngine::play
/// [`reset`]: GameEngine::reset
#[derive(Debug)]
pub struct GameEngine<O: GameObserver> {
    state: GameState,
    observer: O,
}

impl<O: GameObserver> GameEngine<O> {
    /// Creates an engine in the initial state reporting to `observer`.
    pub fn new(observer: O) -> Self {
        Self {
            state: GameState::new(),
            observer,
        }
    }

    /// Plays the current player's mark at `(row, column)`.
    ///
    /// On success the observer sees `on_moved`, then `on_game_over` if the
    /// move ended the game; otherwise the turn passes to the other player.
    /// On failure the observer sees exactly one `on_rejected` and no state
    /// changes.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameAlreadyFinished`] once a result has been declared
    /// - [`MoveError::OutOfBounds`] if `row` or `column` is not in `0..3`
    /// - [`MoveError::OccupiedCell`] if the cell already carries a mark
    #[instrument(skip(self), fields(player = ?self.state.current_turn))]
    pub fn play(&mut self, row: usize, column: usize) -> Result<GameStatus, MoveError> {
        let cell = Cell::new(row, column);

        if let Err(reason) = MoveContract::pre(&self.state, &cell) {
            debug!(%reason, "Move rejected");
            self.observer.on_rejected(row, column, &reason);
            return Err(reason);
        }

        #[cfg(debug_assertions)]
        let before = self.state.clone();

        let player = self.state.current_turn;
        let mark = player.mark();
        self.state.board.set(cell, mark);
        self.state.history.push(Move::new(player, cell, mark));
        debug!(%mark, "Move accepted");
        self.observer.on_moved(row, column, player, mark);

        if let Some(result) = self.detect_result(player) {
            info!(%result, "Game over");
            self.state.result = Some(result);
            self.observer.on_game_over(&result);
        } else {
            self.state.current_turn = player.opponent();
        }

        #[cfg(debug_assertions)]
        {
            if let Err(violation) = MoveContract::post(&before, &self.state) {
                panic!("{violation}");
            }
        }

        Ok(self.state.status())
    }

    /// Post-move hook: judges the board for the player who just moved.
    fn detect_result(&self, mover: Player) -> Option<GameResult> {
        rules::evaluate(&self.state.board, mover)
    }

    /// Restores the initial state: empty board, `First` to move, no result.
    ///
    /// The observer is not notified.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!(moves = self.state.history.len(), "Resetting game");
        self.state = GameState::new();
    }

    /// Returns the full game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the player whose turn it is.
    pub fn current_turn(&self) -> Player {
        self.state.current_turn()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Returns the declared result, if any.
    pub fn result(&self) -> Option<&GameResult> {
        self.state.result()
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Returns true once a result has been declared.
    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Returns the accepted moves in order.
    pub fn history(&self) -> &[Move] {
        self.state.history()
    }

    /// Returns the cells that can still be played.
    pub fn available_cells(&self) -> Vec<Cell> {
        self.state.available_cells()
    }

    /// Returns the observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Returns the observer mutably.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Consumes the engine and hands back its observer.
    pub fn into_observer(self) -> O {
        self.observer
    }
}
