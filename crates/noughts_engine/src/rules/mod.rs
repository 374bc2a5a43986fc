//! Game rules for noughts and crosses.
//!
//! Pure functions over a [`Board`]. Result detection only ever looks at the
//! mark of the player who just moved, so a finished board is judged from the
//! mover's point of view.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, winning_line};

use super::outcome::GameResult;
use super::types::{Board, Player};
use tracing::instrument;

/// Decides whether the move just made by `mover` ended the game.
///
/// Lines are scanned first (columns, rows, diagonal, anti-diagonal); the
/// first complete one wins. Otherwise a full board is a draw.
#[instrument(skip(board))]
pub fn evaluate(board: &Board, mover: Player) -> Option<GameResult> {
    if let Some(line) = winning_line(board, mover.mark()) {
        return Some(GameResult::Win {
            winner: mover,
            line,
        });
    }

    if is_full(board) {
        return Some(GameResult::Draw);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, Mark};

    fn board_from(rows: [&str; 3]) -> Board {
        let mut board = Board::new();
        for (row, text) in rows.iter().enumerate() {
            for (column, symbol) in text.chars().enumerate() {
                let mark = match symbol {
                    'X' => Mark::Cross,
                    'O' => Mark::Nought,
                    _ => Mark::Empty,
                };
                board.set(Cell::new(row, column), mark);
            }
        }
        board
    }

    #[test]
    fn test_no_result_mid_game() {
        let board = board_from(["X..", ".O.", "..."]);
        assert_eq!(evaluate(&board, Player::Second), None);
    }

    #[test]
    fn test_only_mover_mark_counts() {
        // O holds the top row, but X just moved and has nothing.
        let board = board_from(["OOO", "XX.", "X.."]);
        assert_eq!(evaluate(&board, Player::First), None);
    }

    #[test]
    fn test_win_beats_draw_on_full_board() {
        let board = board_from(["XOX", "OXO", "OXX"]);
        assert_eq!(
            evaluate(&board, Player::First),
            Some(GameResult::Win {
                winner: Player::First,
                line: [(0, 0), (1, 1), (2, 2)].into(),
            })
        );
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = board_from(["XOX", "XOO", "OXX"]);
        assert_eq!(evaluate(&board, Player::First), Some(GameResult::Draw));
        assert_eq!(evaluate(&board, Player::Second), Some(GameResult::Draw));
    }
}
