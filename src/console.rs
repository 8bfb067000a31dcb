//! Line-oriented terminal front end.

use tictactoe_mvp::{Board, Difficulty, GameSettings, GameView, Outcome, Position};

/// Terminal [`GameView`] writing to stdout.
pub struct ConsoleView {
    settings: GameSettings,
    input_enabled: bool,
    highlighted: Vec<Position>,
}

impl ConsoleView {
    /// Creates a console view starting from `settings`.
    pub fn new(settings: GameSettings) -> Self {
        Self {
            settings,
            input_enabled: false,
            highlighted: Vec::new(),
        }
    }

    /// Whether the board currently accepts moves.
    pub fn accepts_input(&self) -> bool {
        self.input_enabled
    }

    /// Flips who opens the next game.
    pub fn toggle_first_mover(&mut self) {
        self.settings.first_mover = self.settings.first_mover.toggle();
        println!("{} will move first next game.", self.settings.first_mover.label());
    }

    /// Sets the difficulty for the next game.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.settings.difficulty = difficulty;
        println!("Difficulty for next game: {}", difficulty.label());
    }

    /// Prints the command summary.
    pub fn print_help(&self) {
        println!("Commands:");
        println!("  new          start a new game");
        println!("  1-9          mark a cell (1 = top-left, 9 = bottom-right)");
        println!("  <row> <col>  mark a cell by coordinates (0-2)");
        println!("  first        toggle who moves first (now: {})", self.settings.first_mover.label());
        println!("  easy | hard  set difficulty (now: {})", self.settings.difficulty.label());
        println!("  quit         leave");
    }
}

impl GameView for ConsoleView {
    fn board_changed(&mut self, board: &Board) {
        self.highlighted.clear();
        println!("\n{}\n", board);
    }

    fn game_ended(&mut self, outcome: Outcome) {
        let line = self
            .highlighted
            .iter()
            .map(|pos| pos.label())
            .collect::<Vec<_>>()
            .join(", ");
        if line.is_empty() {
            println!("{}", outcome.message());
        } else {
            println!("{} ({})", outcome.message(), line);
        }
        println!("Type 'new' to play again.");
    }

    fn input_enabled(&mut self, enabled: bool) {
        self.input_enabled = enabled;
    }

    fn highlight_cell(&mut self, position: Position) {
        self.highlighted.push(position);
    }

    fn settings(&self) -> GameSettings {
        self.settings
    }
}

/// A parsed line of console input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start a new game.
    New,
    /// Choose the cell at `(row, col)`.
    Cell(usize, usize),
    /// Toggle the first mover.
    First,
    /// Change difficulty.
    Difficulty(Difficulty),
    /// Show help.
    Help,
    /// Exit.
    Quit,
}

impl Command {
    /// Parses one input line; `None` for anything unrecognised.
    pub fn parse(line: &str) -> Option<Command> {
        let line = line.trim().to_lowercase();
        match line.as_str() {
            "new" | "n" | "start" => return Some(Command::New),
            "first" => return Some(Command::First),
            "easy" => return Some(Command::Difficulty(Difficulty::Easy)),
            "hard" => return Some(Command::Difficulty(Difficulty::Hard)),
            "help" | "h" | "?" => return Some(Command::Help),
            "quit" | "q" | "exit" => return Some(Command::Quit),
            _ => {}
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            [row, col] => Some(Command::Cell(row.parse().ok()?, col.parse().ok()?)),
            [single] => {
                let pos = Position::from_label_or_number(single)?;
                Some(Command::Cell(pos.row(), pos.col()))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keypad_and_coordinates() {
        assert_eq!(Command::parse("1"), Some(Command::Cell(0, 0)));
        assert_eq!(Command::parse("9"), Some(Command::Cell(2, 2)));
        assert_eq!(Command::parse("1 2"), Some(Command::Cell(1, 2)));
        assert_eq!(Command::parse("center"), Some(Command::Cell(1, 1)));
        assert_eq!(Command::parse("0"), None);
        assert_eq!(Command::parse("10"), None);
        assert_eq!(Command::parse("5"), Some(Command::Cell(1, 1)));
    }

    #[test]
    fn test_parse_words() {
        assert_eq!(Command::parse(" NEW "), Some(Command::New));
        assert_eq!(Command::parse("hard"), Some(Command::Difficulty(Difficulty::Hard)));
        assert_eq!(Command::parse("q"), Some(Command::Quit));
        assert_eq!(Command::parse("banana"), None);
    }
}
