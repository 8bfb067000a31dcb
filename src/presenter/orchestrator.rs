//! Game orchestration between the player, the opponent and the view.

use super::view::GameView;
use crate::games::tictactoe::{
    GameState, MoveError, OPPONENT_MARK, Outcome, PLAYER_MARK, Phase, Position, rules,
};
use crate::opponent::{ComputerOpponent, Difficulty, OpponentPlayer};
use tracing::{debug, error, info, instrument};

/// Why a `cell_chosen` event was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Rejection {
    /// No game has been started.
    #[display("No game in progress")]
    NotStarted,
    /// The game has already ended.
    #[display("Game is already over")]
    GameOver,
    /// The opponent is still moving.
    #[display("Not the player's turn")]
    NotPlayersTurn,
    /// Row or column above 2.
    #[display("Cell ({}, {}) is off the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Position),
}

/// What the presenter did with an inbound event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// The event was applied; the presenter is now in this phase.
    Applied(Phase),
    /// The event was ignored; no state changed and nothing was emitted.
    Ignored(Rejection),
}

/// Owns one game session and drives it from view events.
///
/// A whole turn (player move, rules check, opponent move, rules check) runs
/// to completion inside a single `cell_chosen` call.
pub struct Presenter<V, O = ComputerOpponent> {
    view: V,
    opponent: O,
    state: GameState,
    phase: Phase,
    difficulty: Difficulty,
}

impl<V: GameView> Presenter<V> {
    /// Creates a presenter with the rule-based opponent.
    pub fn new(view: V, seed: Option<u64>) -> Self {
        Self::with_opponent(view, ComputerOpponent::new(seed))
    }
}

impl<V: GameView, O: OpponentPlayer> Presenter<V, O> {
    /// Creates a presenter with a custom opponent.
    #[instrument(skip_all, fields(opponent = %opponent.name()))]
    pub fn with_opponent(view: V, opponent: O) -> Self {
        info!("Creating presenter");
        Self {
            view,
            opponent,
            state: GameState::new(),
            phase: Phase::AwaitingStart,
            difficulty: Difficulty::default(),
        }
    }

    /// Starts (or restarts) a game.
    ///
    /// Reads the view's settings, resets the state and, if the opponent
    /// opens, plays its first move before returning.
    #[instrument(skip(self), fields(from = %self.phase))]
    pub fn start_game(&mut self) -> Result<Phase, MoveError> {
        let settings = self.view.settings();
        self.difficulty = settings.difficulty;
        self.state.reset();
        info!(
            difficulty = settings.difficulty.label(),
            first = settings.first_mover.label(),
            "Starting game"
        );

        self.view.board_changed(self.state.board());
        self.view.input_enabled(true);
        self.phase = Phase::PlayerTurn;

        if settings.opponent_moves_first() {
            self.play_opponent_turn()?;
        }
        Ok(self.phase)
    }

    /// Handles the player choosing the cell at `(row, col)`.
    ///
    /// Illegal choices are ignored and reported as [`Handled::Ignored`].
    /// `Err` is reserved for an opponent that fails to produce a legal
    /// move; the game then stops in [`Phase::Over`] with input disabled.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn cell_chosen(&mut self, row: usize, col: usize) -> Result<Handled, MoveError> {
        let pos = match self.screen(row, col) {
            Ok(pos) => pos,
            Err(rejection) => {
                debug!(%rejection, "Ignoring cell choice");
                return Ok(Handled::Ignored(rejection));
            }
        };

        self.state.place(pos, PLAYER_MARK)?;
        self.view.board_changed(self.state.board());
        debug!(%pos, "Player moved");

        if !self.settle() {
            self.play_opponent_turn()?;
        }
        Ok(Handled::Applied(self.phase))
    }

    fn screen(&self, row: usize, col: usize) -> Result<Position, Rejection> {
        match self.phase {
            Phase::AwaitingStart => return Err(Rejection::NotStarted),
            Phase::Over => return Err(Rejection::GameOver),
            Phase::OpponentTurn => return Err(Rejection::NotPlayersTurn),
            Phase::PlayerTurn => {}
        }
        if self.state.is_over() {
            return Err(Rejection::GameOver);
        }
        if !self.state.is_player_turn() {
            return Err(Rejection::NotPlayersTurn);
        }
        let pos = Position::from_row_col(row, col).ok_or(Rejection::OutOfBounds { row, col })?;
        if !self.state.board().is_empty(pos) {
            return Err(Rejection::CellOccupied(pos));
        }
        Ok(pos)
    }

    fn play_opponent_turn(&mut self) -> Result<(), MoveError> {
        self.phase = Phase::OpponentTurn;

        if let Err(err) = self.apply_opponent_move() {
            self.halt(&err);
            return Err(err);
        }

        if !self.settle() {
            self.phase = Phase::PlayerTurn;
        }
        Ok(())
    }

    fn apply_opponent_move(&mut self) -> Result<(), MoveError> {
        let pos = self
            .opponent
            .choose_move(self.state.board(), self.difficulty)
            .ok_or_else(|| MoveError::NoMoveAvailable(self.opponent.name().to_string()))?;

        self.state.place(pos, OPPONENT_MARK)?;
        self.view.board_changed(self.state.board());
        debug!(%pos, opponent = %self.opponent.name(), "Opponent moved");
        Ok(())
    }

    /// Stops a game the opponent cannot continue and locks the view.
    fn halt(&mut self, err: &MoveError) {
        error!(%err, opponent = %self.opponent.name(), "Opponent turn failed");
        self.state.finish();
        self.phase = Phase::Over;
        self.view.input_enabled(false);
    }

    /// Ends the game if the board is decided. Returns true when it did.
    fn settle(&mut self) -> bool {
        let outcome = rules::outcome(self.state.board());
        if !outcome.is_terminal() {
            return false;
        }

        self.state.finish();
        self.phase = Phase::Over;
        info!(outcome = outcome.as_ref(), "Game over");

        let winner = match outcome {
            Outcome::PlayerWin => Some(PLAYER_MARK),
            Outcome::OpponentWin => Some(OPPONENT_MARK),
            Outcome::Draw | Outcome::Ongoing => None,
        };
        if let Some(line) = winner.and_then(|mark| rules::winning_line(self.state.board(), mark)) {
            for pos in line {
                self.view.highlight_cell(pos);
            }
        }

        self.view.game_ended(outcome);
        self.view.input_enabled(false);
        true
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Difficulty captured at the last `start_game`.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns the view.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Returns the view mutably, e.g. to change its settings between games.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Returns the opponent.
    pub fn opponent(&self) -> &O {
        &self.opponent
    }
}
