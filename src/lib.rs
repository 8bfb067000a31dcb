//! Tic-tac-toe engine with a presenter-driven turn loop.
//!
//! The human plays `X` against a computer opponent playing `O`. All rules,
//! win and draw detection and opponent decisions live here; a front end only
//! implements [`GameView`] and forwards two events.
//!
//! # Architecture
//!
//! - **Model**: [`Board`], [`GameState`] and the pure [`rules`] functions
//! - **Opponent**: random or one-ply heuristic move selection
//! - **Presenter**: [`Presenter`] owns one session and drives the view
//! - **Sessions**: [`SessionManager`] keeps independent games apart
//!
//! # Example
//!
//! ```
//! use tictactoe_mvp::{GameSettings, Handled, Phase, Presenter, RecordingView};
//!
//! let view = RecordingView::new(GameSettings::default());
//! let mut presenter = Presenter::new(view, Some(7));
//!
//! presenter.start_game().unwrap();
//! let handled = presenter.cell_chosen(1, 1).unwrap();
//! assert_eq!(handled, Handled::Applied(Phase::PlayerTurn));
//! assert_eq!(presenter.state().history().len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod opponent;
mod presenter;
mod session;
mod settings;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};
pub use settings::{FirstMover, GameSettings};

// Crate-level exports - Game model
pub use games::tictactoe::{
    AlternatingTurnInvariant, Board, BoardParseError, Cell, CellIsEmpty, Contract, GameNotOver,
    GameState, Invariant, InvariantSet, InvariantViolation, Mark, MarksAlternate, MarksBalanced,
    MonotonicBoardInvariant, Move, MoveError, OPPONENT_MARK, Outcome, PLAYER_MARK, Phase,
    PlacementContract, Position, StateInvariants, rules,
};

// Crate-level exports - Opponent
pub use opponent::{
    ComputerOpponent, Difficulty, OpponentPlayer, heuristic_move, random_move, winning_move,
};

// Crate-level exports - Presenter
pub use presenter::{GameView, Handled, Notification, Presenter, RecordingView, Rejection};

// Crate-level exports - Session management
pub use session::{SessionError, SessionId, SessionManager};
