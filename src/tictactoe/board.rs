//! Board representation and line evaluation.
//!
//! The board is a flat array of nine cells indexed 0..9, row-major:
//!
//! ```text
//!  0 | 1 | 2
//! ---+---+---
//!  3 | 4 | 5
//! ---+---+---
//!  6 | 7 | 8
//! ```

use serde::{Deserialize, Serialize};

/// Number of cells on the board.
pub const BOARD_CELLS: usize = 9;

/// Index of the center cell.
pub const CENTER: usize = 4;

/// The eight winning lines: three rows, three columns, two diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A player's mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The opposing mark.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// One cell of the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Taken(Mark),
}

impl Cell {
    /// Whether the cell holds no mark.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The mark in this cell, if any.
    #[must_use]
    pub const fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Taken(mark) => Some(mark),
        }
    }
}

/// Result of evaluating a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// No line completed, empty cells remain.
    InProgress,
    /// A line of three equal marks exists.
    Winner(Mark),
    /// Board full with no winner.
    Draw,
}

impl GameOutcome {
    /// Whether the game has ended.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::InProgress => write!(f, "in progress"),
            GameOutcome::Winner(mark) => write!(f, "Winner: {mark}"),
            GameOutcome::Draw => write!(f, "It's a Draw!"),
        }
    }
}

/// The 3x3 board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a cell. Returns `None` for out-of-range indices.
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Whether the given cell is in range and unoccupied.
    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        self.cell(index).is_some_and(Cell::is_empty)
    }

    /// Place a mark without validation. Callers validate first.
    pub(crate) fn place(&mut self, index: usize, mark: Mark) {
        self.cells[index] = Cell::Taken(mark);
    }

    /// Number of marks on the board.
    #[must_use]
    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Whether every cell is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Indices of all empty cells, in board order.
    pub fn open_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(|(i, _)| i)
    }

    /// Check the eight lines for a winner, then fullness for a draw.
    ///
    /// A board never evaluates to both: the first completed line wins
    /// and the scan stops there.
    #[must_use]
    pub fn evaluate(&self) -> GameOutcome {
        for line in WIN_LINES {
            let [a, b, c] = line.map(|i| self.cells[i]);
            if let Cell::Taken(mark) = a {
                if a == b && b == c {
                    return GameOutcome::Winner(mark);
                }
            }
        }

        if self.is_full() {
            GameOutcome::Draw
        } else {
            GameOutcome::InProgress
        }
    }
}

/// Test helper: build a board from a 9-char pattern of 'X', 'O', '.'.
#[cfg(test)]
pub(crate) fn board_from(pattern: &str) -> Board {
    let mut board = Board::new();
    for (i, ch) in pattern.chars().enumerate() {
        match ch {
            'X' => board.place(i, Mark::X),
            'O' => board.place(i, Mark::O),
            '.' => {}
            other => panic!("bad pattern char {other:?}"),
        }
    }
    board
}
