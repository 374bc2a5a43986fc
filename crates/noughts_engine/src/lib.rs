//! Noughts engine - a 3x3 noughts-and-crosses state machine.
//!
//! The engine tracks whose turn it is, validates and applies moves, and
//! declares the result (a win with its line, or a draw). Everything it does
//! is reported synchronously to a [`GameObserver`].
//!
//! # Example
//!
//! ```
//! use noughts_engine::{EventLog, GameEngine, GameResult, Player};
//!
//! let mut engine = GameEngine::new(EventLog::new());
//! for (row, column) in [(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)] {
//!     engine.play(row, column).expect("legal move");
//! }
//!
//! match engine.result() {
//!     Some(GameResult::Win { winner, line }) => {
//!         assert_eq!(*winner, Player::First);
//!         assert_eq!(line.coordinates(), [(0, 0), (1, 0), (2, 0)]);
//!     }
//!     other => panic!("unexpected result: {other:?}"),
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod engine;
mod observer;
mod outcome;
mod state;
mod types;

// Public rule and verification modules
pub mod contracts;
pub mod invariants;
pub mod rules;

// Crate-level exports - Domain types
pub use types::{BOARD_SIZE, Board, Cell, Mark, Player};

// Crate-level exports - Results
pub use outcome::{GameResult, GameStatus, Line};

// Crate-level exports - Moves
pub use action::{Move, MoveError};

// Crate-level exports - Engine
pub use engine::GameEngine;
pub use state::GameState;

// Crate-level exports - Observer contract
pub use observer::{EventLog, GameEvent, GameObserver};

// Crate-level exports - Contracts and invariants
pub use contracts::{Contract, ContractViolation, LegalMove, MoveContract};
pub use invariants::{GameInvariants, Invariant, InvariantSet, InvariantViolation};
