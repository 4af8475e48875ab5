//! Board coordinates and merge directions.
//!
//! A move is anchored at a single [`Cell`] and checks exactly one
//! neighbor in a [`Direction`]. Row 0 is the top of the board; refill
//! gravity pulls toward higher row indices.

use serde::{Deserialize, Serialize};

/// A board position identified by row and column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// Row index, 0 at the top.
    pub row: usize,
    /// Column index, 0 at the left.
    pub col: usize,
}

impl Cell {
    /// Create a cell at the given coordinates.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The adjacent cell one step in `direction`, bounds-checked
    /// against a `rows × cols` board.
    ///
    /// Returns `None` when the step would leave the board.
    #[must_use]
    pub fn neighbor(self, direction: Direction, rows: usize, cols: usize) -> Option<Cell> {
        match direction {
            Direction::Left => (self.col > 0).then(|| Cell::new(self.row, self.col - 1)),
            Direction::Right => (self.col + 1 < cols).then(|| Cell::new(self.row, self.col + 1)),
            Direction::Up => (self.row > 0).then(|| Cell::new(self.row - 1, self.col)),
            Direction::Down => (self.row + 1 < rows).then(|| Cell::new(self.row + 1, self.col)),
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A direction for a single-tile merge attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All four directions, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];
}
