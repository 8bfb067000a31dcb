//! Turn phases and game outcomes.

use super::{OPPONENT_MARK, PLAYER_MARK};
use serde::{Deserialize, Serialize};

/// Where the presenter's turn sequence currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Phase {
    /// No game has been started yet.
    AwaitingStart,
    /// Waiting for the human player to choose a cell.
    PlayerTurn,
    /// The automated opponent is moving.
    OpponentTurn,
    /// The game has ended; only a restart is accepted.
    Over,
}

/// Outcome of a board, recomputed after every move.
///
/// The variant name (`outcome.as_ref()`) is the message sent to the view.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::AsRefStr, strum::Display,
)]
pub enum Outcome {
    /// The human player completed a line.
    PlayerWin,
    /// The automated opponent completed a line.
    OpponentWin,
    /// The board is full with no line.
    Draw,
    /// Play continues.
    Ongoing,
}

impl Outcome {
    /// Returns true once the game cannot continue.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }

    /// Human-readable result text.
    pub fn message(&self) -> String {
        match self {
            Outcome::PlayerWin => format!("{} wins!", PLAYER_MARK),
            Outcome::OpponentWin => format!("{} wins!", OPPONENT_MARK),
            Outcome::Draw => "It's a draw!".to_string(),
            Outcome::Ongoing => "Game in progress".to_string(),
        }
    }
}
