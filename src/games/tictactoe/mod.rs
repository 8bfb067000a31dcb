//! Tic-tac-toe model: board, state, rules and turn bookkeeping.

mod action;
mod contracts;
mod invariants;
mod phases;
mod position;
mod state;
mod types;

pub mod rules;

pub use action::{Move, MoveError};
pub use contracts::{
    CellIsEmpty, Contract, GameNotOver, MarksAlternate, MarksBalanced, PlacementContract,
};
pub use invariants::{
    AlternatingTurnInvariant, Invariant, InvariantSet, InvariantViolation, MonotonicBoardInvariant,
    StateInvariants,
};
pub use phases::{Outcome, Phase};
pub use position::Position;
pub use state::GameState;
pub use types::{Board, BoardParseError, Cell, Mark, OPPONENT_MARK, PLAYER_MARK};
