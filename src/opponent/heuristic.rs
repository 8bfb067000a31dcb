//! One-ply heuristic: win now, else block, else random.
//!
//! Only the immediate next move is considered. A player who sets up a fork
//! beats this opponent; that is the intended difficulty.

use super::random::random_move;
use crate::games::tictactoe::{Board, Mark, Position, rules};
use rand::Rng;
use tracing::{debug, instrument};

/// Returns the first legal move (row-major) that completes a line for `mark`.
///
/// Each candidate is tried on a copy of the board, so `board` is never
/// modified.
#[instrument(skip(board))]
pub fn winning_move(board: &Board, mark: Mark) -> Option<Position> {
    rules::legal_moves(board).into_iter().find(|&pos| {
        board
            .with_mark(pos, mark)
            .is_ok_and(|trial| rules::has_won(&trial, mark))
    })
}

/// Chooses a move for `me` against `them`.
///
/// Steps 1 and 2 are deterministic first-fit scans; only the fallback
/// consumes randomness.
#[instrument(skip(board, rng))]
pub fn heuristic_move<R: Rng + ?Sized>(
    board: &Board,
    me: Mark,
    them: Mark,
    rng: &mut R,
) -> Option<Position> {
    if let Some(pos) = winning_move(board, me) {
        debug!(%pos, "Taking winning move");
        return Some(pos);
    }
    if let Some(pos) = winning_move(board, them) {
        debug!(%pos, "Blocking opponent line");
        return Some(pos);
    }
    debug!("No forcing move, falling back to random");
    random_move(board, rng)
}
