//! Core domain types for noughts and crosses.

use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Side length of the board.
pub const BOARD_SIZE: usize = 3;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, derive_more::Display,
)]
pub enum Player {
    /// Moves first, always plays crosses.
    #[display("Player1")]
    First,
    /// Moves second, always plays noughts.
    #[display("Player2")]
    Second,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// Returns the mark this player writes into a cell.
    ///
    /// The mapping is fixed: `First` plays [`Mark::Cross`], `Second` plays
    /// [`Mark::Nought`].
    pub fn mark(self) -> Mark {
        match self {
            Player::First => Mark::Cross,
            Player::Second => Mark::Nought,
        }
    }
}

/// Content of a single cell.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumIter,
    derive_more::Display,
)]
pub enum Mark {
    /// Nobody has played here yet.
    #[default]
    #[display(".")]
    Empty,
    /// Played by [`Player::First`].
    #[display("X")]
    Cross,
    /// Played by [`Player::Second`].
    #[display("O")]
    Nought,
}

impl Mark {
    /// Returns the player who owns this mark, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Mark::Empty => None,
            Mark::Cross => Some(Player::First),
            Mark::Nought => Some(Player::Second),
        }
    }

    /// Returns true for [`Mark::Empty`].
    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }
}

/// A `(row, column)` coordinate.
///
/// Cells are not guaranteed to be on the board; callers hand in raw indices
/// and the engine checks them with [`Cell::is_on_board`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("({row}, {column})")]
pub struct Cell {
    /// Row index, top to bottom.
    pub row: usize,
    /// Column index, left to right.
    pub column: usize,
}

impl Cell {
    /// Creates a cell from raw indices.
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// All nine cells in row-major order.
    pub const ALL: [Cell; 9] = [
        Cell::new(0, 0),
        Cell::new(0, 1),
        Cell::new(0, 2),
        Cell::new(1, 0),
        Cell::new(1, 1),
        Cell::new(1, 2),
        Cell::new(2, 0),
        Cell::new(2, 1),
        Cell::new(2, 2),
    ];

    /// Returns true when both indices fall inside the board.
    pub fn is_on_board(self) -> bool {
        self.row < BOARD_SIZE && self.column < BOARD_SIZE
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, column): (usize, usize)) -> Self {
        Self::new(row, column)
    }
}

/// 3x3 board indexed by `(row, column)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the mark at `cell`, or `None` when the cell is off the board.
    pub fn get(&self, cell: Cell) -> Option<Mark> {
        self.cells.get(cell.row)?.get(cell.column).copied()
    }

    /// Writes `mark` into `cell`.
    ///
    /// Only the engine writes to the board, and only after its
    /// preconditions have passed. Off-board cells are ignored.
    pub(crate) fn set(&mut self, cell: Cell, mark: Mark) {
        if let Some(slot) = self
            .cells
            .get_mut(cell.row)
            .and_then(|row| row.get_mut(cell.column))
        {
            *slot = mark;
        }
    }

    /// Checks if a cell is on the board and unmarked.
    pub fn is_empty(&self, cell: Cell) -> bool {
        matches!(self.get(cell), Some(Mark::Empty))
    }

    /// Checks if every cell carries a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|mark| !mark.is_empty())
    }

    /// Counts cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().flatten().filter(|m| **m == mark).count()
    }

    /// Returns the unmarked cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Cell> {
        Cell::ALL
            .iter()
            .copied()
            .filter(|cell| self.is_empty(*cell))
            .collect()
    }

    /// Returns the rows of the grid.
    pub fn rows(&self) -> &[[Mark; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        self.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|mark| mark.to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}
