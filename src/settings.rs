//! Per-game settings read from the view at the start of every game.

use crate::opponent::Difficulty;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Which side takes the first move in a new game.
///
/// Defaults to [`FirstMover::Player`] so the human moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstMover {
    /// The human player opens.
    #[default]
    Player,
    /// The automated opponent opens.
    Opponent,
}

impl FirstMover {
    /// Returns the display label for this option.
    pub fn label(self) -> &'static str {
        match self {
            Self::Player => "Player",
            Self::Opponent => "Computer",
        }
    }

    /// Toggles between `Player` and `Opponent`.
    pub fn toggle(self) -> Self {
        match self {
            Self::Player => Self::Opponent,
            Self::Opponent => Self::Player,
        }
    }
}

/// Settings snapshot taken once per `start_game`.
///
/// Changing the view's settings mid-game has no effect until the next start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GameSettings {
    /// Who takes the first move.
    pub first_mover: FirstMover,
    /// How the opponent picks moves.
    pub difficulty: Difficulty,
}

impl GameSettings {
    /// Creates a new `GameSettings` with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds settings from the two view flags.
    #[instrument]
    pub fn from_flags(opponent_moves_first: bool, difficulty_is_easy: bool) -> Self {
        Self {
            first_mover: if opponent_moves_first {
                FirstMover::Opponent
            } else {
                FirstMover::Player
            },
            difficulty: Difficulty::from_easy_flag(difficulty_is_easy),
        }
    }

    /// True when the opponent opens the game.
    pub fn opponent_moves_first(&self) -> bool {
        self.first_mover == FirstMover::Opponent
    }

    /// True when the opponent plays random moves.
    pub fn difficulty_is_easy(&self) -> bool {
        self.difficulty.is_easy()
    }
}
