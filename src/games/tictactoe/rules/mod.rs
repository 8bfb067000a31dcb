//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board snapshot.
//! Nothing here mutates state; callers own the board.

pub mod draw;
pub mod legal;
pub mod win;

pub use draw::{is_draw, is_full};
pub use legal::legal_moves;
pub use win::{LINES, has_won, winning_line};

use super::phases::Outcome;
use super::{Board, OPPONENT_MARK, PLAYER_MARK};
use tracing::instrument;

/// Derives the outcome of a board from the player's point of view.
///
/// Wins are checked before fullness, so a move that completes a line on the
/// last empty cell counts as a win, not a draw.
#[instrument(skip(board))]
pub fn outcome(board: &Board) -> Outcome {
    if has_won(board, PLAYER_MARK) {
        Outcome::PlayerWin
    } else if has_won(board, OPPONENT_MARK) {
        Outcome::OpponentWin
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_ongoing() {
        assert_eq!(outcome(&Board::new()), Outcome::Ongoing);
    }

    #[test]
    fn test_win_on_last_cell_is_not_draw() {
        let board: Board = "XOX/OXO/OXX".parse().unwrap();
        assert!(is_full(&board));
        assert_eq!(outcome(&board), Outcome::PlayerWin);
    }

    #[test]
    fn test_outcome_opponent_and_draw() {
        let won: Board = "OOO/XX./X..".parse().unwrap();
        assert_eq!(outcome(&won), Outcome::OpponentWin);

        let drawn: Board = "XOX/XOO/OXX".parse().unwrap();
        assert_eq!(outcome(&drawn), Outcome::Draw);
    }
}
