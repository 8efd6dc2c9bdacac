//! Bounds-safe board coordinates.
//!
//! The input collaborator translates pixels to (row, col) pairs before the
//! engine ever sees them; `Position` makes off-board coordinates
//! unrepresentable so every neighbor and landing lookup is checked by
//! construction rather than by scattered index guards.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: u8 = 8;

/// A cell on the 8x8 board.
///
/// Row 0 is the red home rank, row 7 the black home rank. Construction is
/// fallible: a `Position` that exists is always on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Creates a position, returning `None` if either coordinate is off the board.
    pub fn new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Returns the row (0-7).
    pub fn row(&self) -> u8 {
        self.row
    }

    /// Returns the column (0-7).
    pub fn col(&self) -> u8 {
        self.col
    }

    /// Steps diagonally by the given row/column deltas.
    ///
    /// Returns `None` when the step leaves the board, which is how capture
    /// geometry near the edges stays index-safe.
    #[instrument]
    pub fn step(&self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i16 + d_row as i16;
        let col = self.col as i16 + d_col as i16;
        if (0..BOARD_SIZE as i16).contains(&row) && (0..BOARD_SIZE as i16).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Signed (row, col) offset from `self` to `other`.
    pub fn offset_to(&self, other: Position) -> (i8, i8) {
        (
            (other.row as i16 - self.row as i16) as i8,
            (other.col as i16 - self.col as i16) as i8,
        )
    }

    /// Midpoint between two cells that are exactly two diagonal steps apart.
    ///
    /// This is the square a capture jumps over. Returns `None` for any other
    /// pair of cells.
    pub fn between(&self, other: Position) -> Option<Self> {
        let (d_row, d_col) = self.offset_to(other);
        if d_row.abs() == 2 && d_col.abs() == 2 {
            self.step(d_row / 2, d_col / 2)
        } else {
            None
        }
    }

    /// True for the dark squares of the standard parity pattern.
    ///
    /// Pieces only ever occupy squares where row and column share parity,
    /// matching the starting layout.
    pub fn is_dark(&self) -> bool {
        self.row % 2 == self.col % 2
    }

    /// All positions on the board in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).map(move |col| Position { row, col }))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
