//! A view that records notifications instead of drawing them.

use super::view::GameView;
use crate::games::tictactoe::{Board, Outcome, Position};
use crate::settings::GameSettings;

/// One outbound call made by the presenter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// `board_changed` with the snapshot it carried.
    BoardChanged(Board),
    /// `game_ended` with its outcome.
    GameEnded(Outcome),
    /// `input_enabled` with its flag.
    InputEnabled(bool),
    /// `highlight_cell` with its position.
    CellHighlighted(Position),
}

/// Headless [`GameView`] that keeps every notification in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingView {
    settings: GameSettings,
    notifications: Vec<Notification>,
}

impl RecordingView {
    /// Creates a recorder reporting `settings` at each game start.
    pub fn new(settings: GameSettings) -> Self {
        Self {
            settings,
            notifications: Vec::new(),
        }
    }

    /// Replaces the settings picked up by the next `start_game`.
    pub fn set_settings(&mut self, settings: GameSettings) {
        self.settings = settings;
    }

    /// Everything recorded so far.
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Drains the recorded notifications.
    pub fn take(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    /// Number of `board_changed` calls.
    pub fn board_changes(&self) -> usize {
        self.notifications
            .iter()
            .filter(|n| matches!(n, Notification::BoardChanged(_)))
            .count()
    }

    /// Outcomes passed to `game_ended`, in order.
    pub fn endings(&self) -> Vec<Outcome> {
        self.notifications
            .iter()
            .filter_map(|n| match n {
                Notification::GameEnded(outcome) => Some(*outcome),
                _ => None,
            })
            .collect()
    }

    /// The most recent board snapshot.
    pub fn last_board(&self) -> Option<&Board> {
        self.notifications.iter().rev().find_map(|n| match n {
            Notification::BoardChanged(board) => Some(board),
            _ => None,
        })
    }
}

impl GameView for RecordingView {
    fn board_changed(&mut self, board: &Board) {
        self.notifications.push(Notification::BoardChanged(*board));
    }

    fn game_ended(&mut self, outcome: Outcome) {
        self.notifications.push(Notification::GameEnded(outcome));
    }

    fn input_enabled(&mut self, enabled: bool) {
        self.notifications.push(Notification::InputEnabled(enabled));
    }

    fn highlight_cell(&mut self, position: Position) {
        self.notifications.push(Notification::CellHighlighted(position));
    }

    fn settings(&self) -> GameSettings {
        self.settings
    }
}
