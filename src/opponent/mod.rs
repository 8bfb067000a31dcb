//! The automated opponent and its move selection strategies.

mod heuristic;
mod random;

pub use heuristic::{heuristic_move, winning_move};
pub use random::random_move;

use crate::games::tictactoe::{Board, OPPONENT_MARK, PLAYER_MARK, Position};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// How the opponent picks its moves.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Uniformly random legal moves.
    #[default]
    Easy,
    /// Win if possible, else block, else random.
    Hard,
}

impl Difficulty {
    /// Maps the view's "easy mode" checkbox to a difficulty.
    pub fn from_easy_flag(easy: bool) -> Self {
        if easy { Difficulty::Easy } else { Difficulty::Hard }
    }

    /// Returns true for random play.
    pub fn is_easy(self) -> bool {
        matches!(self, Difficulty::Easy)
    }

    /// Returns the display label for this option.
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Trait for the automated side of the game.
///
/// The presenter asks for a move only while the game is unresolved, so an
/// implementation returning `None` there is treated as a defect.
pub trait OpponentPlayer {
    /// Chooses the next position for the opponent's mark.
    fn choose_move(&mut self, board: &Board, difficulty: Difficulty) -> Option<Position>;

    /// Returns the opponent's display name.
    fn name(&self) -> &str;
}

/// Rule-based opponent with an injectable random source.
///
/// ```
/// use tictactoe_mvp::ComputerOpponent;
///
/// // Reproducible fallback moves, for tests and replays
/// let seeded = ComputerOpponent::new(Some(12345));
///
/// // System entropy
/// let live = ComputerOpponent::new(None);
/// ```
#[derive(Debug, Clone)]
pub struct ComputerOpponent<R = StdRng> {
    name: String,
    rng: R,
}

impl ComputerOpponent<StdRng> {
    /// Creates an opponent, seeded when `seed` is given.
    #[instrument]
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        info!(seeded = seed.is_some(), "Creating computer opponent");
        Self::with_rng(rng)
    }
}

impl<R: Rng> ComputerOpponent<R> {
    /// Creates an opponent drawing from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self {
            name: "Computer".to_string(),
            rng,
        }
    }
}

impl<R: Rng> OpponentPlayer for ComputerOpponent<R> {
    #[instrument(skip(self, board), fields(opponent = %self.name))]
    fn choose_move(&mut self, board: &Board, difficulty: Difficulty) -> Option<Position> {
        let choice = match difficulty {
            Difficulty::Easy => random_move(board, &mut self.rng),
            Difficulty::Hard => heuristic_move(board, OPPONENT_MARK, PLAYER_MARK, &mut self.rng),
        };
        debug!(?choice, difficulty = difficulty.label(), "Opponent chose move");
        choice
    }

    fn name(&self) -> &str {
        &self.name
    }
}
