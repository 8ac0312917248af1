//! Board coordinates and step directions.

use serde::{Deserialize, Serialize};

/// Number of rows on the board.
pub const ROWS: u8 = 7;

/// Number of columns on the board.
pub const COLS: u8 = 9;

/// Total number of cells on the board.
pub const CELL_COUNT: usize = ROWS as usize * COLS as usize;

/// A coordinate on the board.
///
/// Coordinates are not guaranteed to be on the grid: callers forward raw user
/// input here, and the engine reports off-grid values as out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(u8, u8)", into = "(u8, u8)")]
pub struct Coord {
    /// Row, 0..7 from the top.
    pub row: u8,
    /// Column, 0..9 from Player 1's side.
    pub col: u8,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Check if this coordinate lies on the 7x9 grid.
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.row < ROWS && self.col < COLS
    }

    /// Row-major index into a cell array, or `None` when off the grid.
    #[must_use]
    #[inline]
    pub const fn index(self) -> Option<usize> {
        if self.in_bounds() {
            Some(self.row as usize * COLS as usize + self.col as usize)
        } else {
            None
        }
    }

    /// Inverse of [`Coord::index`].
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / COLS as usize) as u8,
            col: (idx % COLS as usize) as u8,
        }
    }

    /// The neighbouring coordinate one step in `dir`.
    ///
    /// Returns `None` if the step would leave the grid.
    #[must_use]
    pub fn step(self, dir: Direction) -> Option<Coord> {
        let (dr, dc) = dir.delta();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        let next = Coord::new(row, col);
        next.in_bounds().then_some(next)
    }

    /// The coordinate one step in `dir`, which may lie off the grid.
    ///
    /// Stepping past row or column 0 wraps to 255, so the result is still off
    /// the grid and reports as out of bounds.
    #[must_use]
    pub const fn offset(self, dir: Direction) -> Coord {
        let (dr, dc) = dir.delta();
        Coord::new(
            self.row.wrapping_add_signed(dr),
            self.col.wrapping_add_signed(dc),
        )
    }

    /// Direction of a single orthogonal step from `self` to `to`.
    ///
    /// Returns `None` for the same cell, diagonals, and anything further than
    /// one cell away.
    #[must_use]
    pub fn direction_to(self, to: Coord) -> Option<Direction> {
        let dr = i16::from(to.row) - i16::from(self.row);
        let dc = i16::from(to.col) - i16::from(self.col);
        match (dr, dc) {
            (-1, 0) => Some(Direction::Up),
            (1, 0) => Some(Direction::Down),
            (0, -1) => Some(Direction::Left),
            (0, 1) => Some(Direction::Right),
            _ => None,
        }
    }

    /// Iterate over every coordinate on the grid in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..CELL_COUNT).map(Coord::from_index)
    }
}

impl From<(u8, u8)> for Coord {
    fn from((row, col): (u8, u8)) -> Self {
        Self::new(row, col)
    }
}

impl From<Coord> for (u8, u8) {
    fn from(coord: Coord) -> Self {
        (coord.row, coord.col)
    }
}

impl std::fmt::Display for Coord {
    /// Formats as the 1-based `(row, col)` pair players see.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", u16::from(self.row) + 1, u16::from(self.col) + 1)
    }
}

/// One of the four orthogonal step directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Towards row 0 (`W`).
    Up,
    /// Towards row 6 (`S`).
    Down,
    /// Towards column 0 (`A`).
    Left,
    /// Towards column 8 (`D`).
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Row and column delta for one step.
    #[must_use]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// The lowercase key for this direction.
    #[must_use]
    pub const fn key(self) -> char {
        match self {
            Direction::Up => 'w',
            Direction::Left => 'a',
            Direction::Down => 's',
            Direction::Right => 'd',
        }
    }

    /// Parse a `W`/`A`/`S`/`D` key, case-insensitive.
    #[must_use]
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_uppercase() {
            'W' => Some(Direction::Up),
            'A' => Some(Direction::Left),
            'S' => Some(Direction::Down),
            'D' => Some(Direction::Right),
            _ => None,
        }
    }
}
