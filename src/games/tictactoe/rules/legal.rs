//! Move legality for tic-tac-toe.

use super::super::{Board, Position};
use tracing::instrument;

/// Returns every empty cell in row-major order.
///
/// The order is part of the contract: first-fit scans over this list break
/// ties toward the top-left.
#[instrument(skip(board))]
pub fn legal_moves(board: &Board) -> Vec<Position> {
    Position::ALL
        .iter()
        .copied()
        .filter(|&pos| board.is_empty(pos))
        .collect()
}
