//! Turn orchestration between the human player, the opponent and the view.

mod orchestrator;
mod recording;
mod view;

pub use orchestrator::{Handled, Presenter, Rejection};
pub use recording::{Notification, RecordingView};
pub use view::GameView;
