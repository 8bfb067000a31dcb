//! Alternating turn invariant: marks alternate and the turn flag follows.

use super::super::{GameState, PLAYER_MARK};
use super::Invariant;

/// Invariant: consecutive moves use different marks, and the player is to
/// move exactly when the last move was the opponent's (or nobody moved).
///
/// Either side may open, so the first mark is not fixed.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        if history.windows(2).any(|pair| pair[0].mark == pair[1].mark) {
            return false;
        }

        let expect_player = history.last().is_none_or(|last| last.mark != PLAYER_MARK);
        state.is_player_turn() == expect_player
    }

    fn description() -> &'static str {
        "Marks alternate and the turn flag matches the last move"
    }
}
