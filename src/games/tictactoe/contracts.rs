//! Contract-based validation for placements.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} place {Q}. Both are checked on every placement, against a copy of
//! the state that is committed only when they hold.

use super::action::{Move, MoveError};
use super::invariants::{InvariantSet, StateInvariants};
use super::state::GameState;
use super::{Cell, Mark};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: no placement once the game is over.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with [`MoveError::GameOver`] on a finished game.
    #[instrument(skip(state))]
    pub fn check(state: &GameState) -> Result<(), MoveError> {
        if state.is_over() {
            warn!("Placement attempted after game over");
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target cell must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with [`MoveError::CellOccupied`] when the cell holds a mark.
    #[instrument(skip(state))]
    pub fn check(action: &Move, state: &GameState) -> Result<(), MoveError> {
        if state.cell_at(action.position) != Cell::Empty {
            warn!(position = %action.position, "Placement attempted on occupied cell");
            Err(MoveError::CellOccupied(action.position))
        } else {
            Ok(())
        }
    }
}

/// Precondition: marks alternate, so the last mover cannot move again.
pub struct MarksAlternate;

impl MarksAlternate {
    /// Fails with [`MoveError::OutOfTurn`] when `action.mark` made the last move.
    #[instrument(skip(state))]
    pub fn check(action: &Move, state: &GameState) -> Result<(), MoveError> {
        match state.history().last() {
            Some(last) if last.mark == action.mark => {
                warn!(mark = %action.mark, "Placement attempted out of turn");
                Err(MoveError::OutOfTurn(action.mark))
            }
            _ => Ok(()),
        }
    }
}

/// Contract for placing a mark.
///
/// Preconditions:
/// - Game is not over
/// - Cell is empty
/// - Mark differs from the last one placed
///
/// Postconditions:
/// - Exactly one move was appended
/// - State invariants hold
pub struct PlacementContract;

impl Contract<GameState, Move> for PlacementContract {
    fn pre(state: &GameState, action: &Move) -> Result<(), MoveError> {
        GameNotOver::check(state)?;
        CellIsEmpty::check(action, state)?;
        MarksAlternate::check(action, state)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        if after.history().len() != before.history().len() + 1 {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: placement must append exactly one move".to_string(),
            ));
        }
        StateInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

/// Mark counts differ by at most one.
pub struct MarksBalanced;

impl MarksBalanced {
    /// Checks the count difference on the board.
    #[instrument(skip(state))]
    pub fn holds(state: &GameState) -> bool {
        let x_count = state.board().count(Mark::X);
        let o_count = state.board().count(Mark::O);
        let valid = x_count.abs_diff(o_count) <= 1;
        if !valid {
            warn!(x_count, o_count, "Mark balance violated");
        }
        valid
    }
}

/// Asserts that state invariants hold (panics on violation in debug builds).
#[instrument(skip(state))]
pub fn assert_invariants(state: &GameState) {
    debug_assert!(MarksBalanced::holds(state), "Mark balance violated");
    debug_assert!(
        StateInvariants::check_all(state).is_ok(),
        "State invariants violated"
    );
}
