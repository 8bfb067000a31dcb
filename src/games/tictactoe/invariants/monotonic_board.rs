//! Monotonic board invariant: cells never change once set.

use super::super::{Board, GameState};
use super::Invariant;

/// Invariant: the board is exactly the replay of the move history.
///
/// Replaying onto an empty board fails if any move targeted a taken cell,
/// and a cell that was overwritten or cleared would make the replay differ.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(state: &GameState) -> bool {
        let mut replayed = Board::new();
        for mov in state.history() {
            if replayed.place(mov.position, mov.mark).is_err() {
                return false;
            }
        }
        replayed == *state.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
