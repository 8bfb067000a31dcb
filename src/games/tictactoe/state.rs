//! Mutable game state owned by a single presenter.

use super::action::{Move, MoveError};
use super::contracts::{Contract, PlacementContract, assert_invariants};
use super::{Board, Cell, Mark, PLAYER_MARK, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Board plus turn and game-over flags.
///
/// Once `is_over` is set the board is frozen until [`GameState::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    is_player_turn: bool,
    is_over: bool,
    history: Vec<Move>,
}

impl GameState {
    /// Creates a fresh state with the player to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            is_player_turn: true,
            is_over: false,
            history: Vec::new(),
        }
    }

    /// Clears the board and hands the turn to the player.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
        debug!("Game state reset");
    }

    /// Places `mark` at `pos`.
    ///
    /// Fails when the game is over, the cell is taken or `mark` moved last.
    /// The move is applied to a copy and committed only once the
    /// postconditions hold, so on `Err` the state is unchanged. On success
    /// the turn passes to the other side.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position, mark: Mark) -> Result<(), MoveError> {
        let action = Move::new(mark, pos);
        PlacementContract::pre(self, &action)?;

        let mut next = self.clone();
        next.board.place(pos, mark)?;
        next.history.push(action);
        next.is_player_turn = mark != PLAYER_MARK;

        PlacementContract::post(self, &next)?;
        assert_invariants(&next);
        *self = next;

        debug!(%action, "Mark placed");
        Ok(())
    }

    /// Reads a cell.
    pub fn cell_at(&self, pos: Position) -> Cell {
        self.board.cell_at(pos)
    }

    /// Freezes the board; called once an outcome is reached.
    pub(crate) fn finish(&mut self) {
        self.is_over = true;
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns true when the player is the side to move.
    pub fn is_player_turn(&self) -> bool {
        self.is_player_turn
    }

    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        self.is_over
    }

    /// Moves played since the last reset.
    pub fn history(&self) -> &[Move] {
        &self.history
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
