//! Random move selection.

use crate::games::tictactoe::{Board, Position, rules};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

/// Picks a legal move uniformly at random.
///
/// Returns `None` only when the board is full.
#[instrument(skip(board, rng))]
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    let choice = rules::legal_moves(board).choose(rng).copied();
    debug!(?choice, "Random move chosen");
    choice
}
