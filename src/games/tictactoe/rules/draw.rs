//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Cell, Mark};
use super::win::has_won;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().all(|(_, cell)| cell != Cell::Empty)
}

/// Checks for a draw: a full board on which neither mark has a line.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && !has_won(board, Mark::X) && !has_won(board, Mark::O)
}
