//! The boundary between the presenter and whatever draws the game.

use crate::games::tictactoe::{Board, Outcome, Position};
use crate::settings::GameSettings;

/// Outbound port implemented by a front end.
///
/// The presenter owns exactly one view and calls these methods
/// synchronously from inside `start_game` and `cell_chosen`.
pub trait GameView {
    /// The board changed; `board` is the full current snapshot.
    fn board_changed(&mut self, board: &Board);

    /// The game reached a terminal outcome.
    fn game_ended(&mut self, outcome: Outcome);

    /// Whether the view should accept further cell choices.
    fn input_enabled(&mut self, enabled: bool);

    /// Marks one cell of the winning line.
    fn highlight_cell(&mut self, _position: Position) {}

    /// Current settings, read once per `start_game`.
    fn settings(&self) -> GameSettings;
}
