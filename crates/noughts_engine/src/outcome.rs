//! Terminal results and overall game status.

use super::types::{Cell, Player};
use serde::{Deserialize, Serialize};

/// An ordered triple of cells forming a row, column or diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line([Cell; 3]);

impl Line {
    /// Creates a line from three cells, in the order given.
    pub const fn new(cells: [Cell; 3]) -> Self {
        Self(cells)
    }

    /// Returns the cells of the line.
    pub fn cells(&self) -> &[Cell; 3] {
        &self.0
    }

    /// Returns the cells as `(row, column)` pairs.
    pub fn coordinates(&self) -> [(usize, usize); 3] {
        self.0.map(|cell| (cell.row, cell.column))
    }
}

impl From<[(usize, usize); 3]> for Line {
    fn from(pairs: [(usize, usize); 3]) -> Self {
        Self(pairs.map(Cell::from))
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{a} {b} {c}")
    }
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// A player completed a line.
    Win {
        /// Player who completed the line.
        winner: Player,
        /// The completed line, in scan order.
        line: Line,
    },
    /// Board full without a completed line.
    Draw,
}

impl GameResult {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameResult::Win { winner, .. } => Some(*winner),
            GameResult::Draw => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn line(&self) -> Option<&Line> {
        match self {
            GameResult::Win { line, .. } => Some(line),
            GameResult::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, GameResult::Draw)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Win { winner, .. } => write!(f, "{winner} has won!"),
            GameResult::Draw => write!(f, "It was a draw!"),
        }
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still accepted.
    InProgress,
    /// A result has been declared.
    Finished(GameResult),
}

impl GameStatus {
    /// Returns true once a result has been declared.
    pub fn is_finished(&self) -> bool {
        matches!(self, GameStatus::Finished(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_accessors() {
        let win = GameResult::Win {
            winner: Player::Second,
            line: Line::from([(0, 2), (1, 2), (2, 2)]),
        };
        assert_eq!(win.winner(), Some(Player::Second));
        assert_eq!(
            win.line().map(Line::coordinates),
            Some([(0, 2), (1, 2), (2, 2)])
        );
        assert!(!win.is_draw());

        assert_eq!(GameResult::Draw.winner(), None);
        assert!(GameResult::Draw.line().is_none());
    }

    #[test]
    fn test_result_display() {
        let win = GameResult::Win {
            winner: Player::First,
            line: Line::from([(0, 0), (1, 1), (2, 2)]),
        };
        assert_eq!(win.to_string(), "Player1 has won!");
        assert_eq!(GameResult::Draw.to_string(), "It was a draw!");
    }

    #[test]
    fn test_line_display_keeps_order() {
        let line = Line::from([(2, 0), (1, 1), (0, 2)]);
        assert_eq!(line.to_string(), "(2, 0) (1, 1) (0, 2)");
    }
}
