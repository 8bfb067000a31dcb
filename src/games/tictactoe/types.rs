//! Core domain types for tic-tac-toe.

use super::action::MoveError;
use super::position::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A mark placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Mark {
    /// The human player's mark.
    X,
    /// The automated opponent's mark.
    O,
}

/// Mark used by the human player for every game.
pub const PLAYER_MARK: Mark = Mark::X;

/// Mark used by the automated opponent for every game.
pub const OPPONENT_MARK: Mark = Mark::O;

/// A single cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Cell holds a mark.
    Occupied(Mark),
}

impl Cell {
    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(Mark::X) => 'X',
            Cell::Occupied(Mark::O) => 'O',
        }
    }
}

/// 3x3 tic-tac-toe board indexed by `(row, col)`.
///
/// Cells only move from [`Cell::Empty`] to a mark; there is no way to clear
/// a cell short of building a new board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cell at a position.
    pub fn cell_at(&self, pos: Position) -> Cell {
        self.cells[pos.row()][pos.col()]
    }

    /// Returns the cell at `(row, col)`, or `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.cell_at(pos) == Cell::Empty
    }

    /// Places a mark on an empty cell.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position, mark: Mark) -> Result<(), MoveError> {
        if !self.is_empty(pos) {
            return Err(MoveError::CellOccupied(pos));
        }
        self.cells[pos.row()][pos.col()] = Cell::Occupied(mark);
        Ok(())
    }

    /// Returns a copy of this board with `mark` placed at `pos`.
    ///
    /// Used for lookahead probes; the receiver is left untouched.
    pub fn with_mark(&self, pos: Position, mark: Mark) -> Result<Board, MoveError> {
        let mut trial = *self;
        trial.place(pos, mark)?;
        Ok(trial)
    }

    /// Iterates all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        Position::ALL.iter().map(|&pos| (pos, self.cell_at(pos)))
    }

    /// Counts cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells()
            .filter(|(_, cell)| *cell == Cell::Occupied(mark))
            .count()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            let line = row
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => ' '.to_string(),
                    other => other.symbol().to_string(),
                })
                .collect::<Vec<_>>()
                .join("|");
            f.write_str(&line)?;
            if r < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Failure to parse a [`Board`] from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// A character other than `X`, `O` or `.` was found.
    #[display("Unexpected character {:?} in board", _0)]
    UnexpectedChar(char),
    /// The text did not describe exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongCellCount(usize),
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells written as `X`, `O` or `.` in row-major order.
    ///
    /// Whitespace and `/` are ignored so rows can be separated, as in
    /// `"XO./.X./..O"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .map(|c| match c.to_ascii_uppercase() {
                'X' => Ok(Cell::Occupied(Mark::X)),
                'O' => Ok(Cell::Occupied(Mark::O)),
                '.' | '_' => Ok(Cell::Empty),
                other => Err(BoardParseError::UnexpectedChar(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        if cells.len() != 9 {
            return Err(BoardParseError::WrongCellCount(cells.len()));
        }

        let mut board = Board::new();
        for (pos, cell) in Position::ALL.iter().zip(cells) {
            board.cells[pos.row()][pos.col()] = cell;
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.cells().all(|(_, cell)| cell == Cell::Empty));
    }

    #[test]
    fn test_place_rejects_occupied_cell() {
        let mut board = Board::new();
        board.place(Position::Center, Mark::X).unwrap();
        assert_eq!(
            board.place(Position::Center, Mark::O),
            Err(MoveError::CellOccupied(Position::Center))
        );
        assert_eq!(board.cell_at(Position::Center), Cell::Occupied(Mark::X));
    }

    #[test]
    fn test_with_mark_leaves_original() {
        let board = Board::new();
        let trial = board.with_mark(Position::TopLeft, Mark::O).unwrap();
        assert!(board.is_empty(Position::TopLeft));
        assert_eq!(trial.cell_at(Position::TopLeft), Cell::Occupied(Mark::O));
    }

    #[test]
    fn test_parse_board() {
        let board: Board = "XO./.X./..O".parse().unwrap();
        assert_eq!(board.get(0, 0), Some(Cell::Occupied(Mark::X)));
        assert_eq!(board.get(0, 1), Some(Cell::Occupied(Mark::O)));
        assert_eq!(board.get(1, 1), Some(Cell::Occupied(Mark::X)));
        assert_eq!(board.get(2, 2), Some(Cell::Occupied(Mark::O)));
        assert_eq!(board.get(3, 0), None);
        assert_eq!(board.count(Mark::X), 2);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "XO".parse::<Board>(),
            Err(BoardParseError::WrongCellCount(2))
        );
        assert_eq!(
            "XOZ......".parse::<Board>(),
            Err(BoardParseError::UnexpectedChar('Z'))
        );
    }

    #[test]
    fn test_display() {
        let board: Board = "X.O/.../..X".parse().unwrap();
        assert_eq!(board.to_string(), "X| |O\n-+-+-\n | | \n-+-+-\n | |X");
    }
}
