use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::coord::Coord;

pub const NUM_COLUMNS: usize = 8;
pub const NUM_ROWS: usize = 8;
pub const NUM_SQUARES: usize = NUM_COLUMNS * NUM_ROWS;

/// A board square packed into a single byte: `index = column + row * 8`.
///
/// Row 0 is the bottom edge. Every `Square` value is on the board; off-board and
/// "skip" indices only exist in the raw `i32` form used by [`crate::rules::Action`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Square(u8);

impl Square {
    /// Square from a board coordinate.
    ///
    /// Panics if the coordinate is off the board.
    #[inline]
    pub fn new(column: usize, row: usize) -> Square {
        assert!(column < NUM_COLUMNS && row < NUM_ROWS, "({column},{row}) is off the board");
        Square((column + row * NUM_COLUMNS) as u8)
    }

    /// Square from a raw index, `None` if it is outside `0..64`.
    #[inline]
    pub fn from_index(index: i32) -> Option<Square> {
        if (0..NUM_SQUARES as i32).contains(&index) {
            Some(Square(index as u8))
        } else {
            None
        }
    }

    #[inline]
    pub fn from_coord(c: Coord) -> Option<Square> {
        if c.on_board() {
            Some(Square((c.x + c.y * NUM_COLUMNS as i32) as u8))
        } else {
            None
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn column(self) -> usize {
        self.index() % NUM_COLUMNS
    }

    #[inline]
    pub fn row(self) -> usize {
        self.index() / NUM_COLUMNS
    }

    #[inline]
    pub fn coord(self) -> Coord {
        Coord::new(self.column() as i32, self.row() as i32)
    }

    /// The square `delta` away, if it is still on the board.
    #[inline]
    pub fn shifted(self, delta: Coord) -> Option<Square> {
        Square::from_coord(self.coord() + delta)
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..NUM_SQUARES as u8).map(Square)
    }
}

impl From<Square> for u8 {
    fn from(sq: Square) -> u8 {
        sq.0
    }
}

impl From<Square> for i32 {
    fn from(sq: Square) -> i32 {
        sq.0 as i32
    }
}

impl TryFrom<u8> for Square {
    type Error = String;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Square::from_index(raw as i32).ok_or_else(|| format!("square index {raw} is off the board"))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.column(), self.row())
    }
}
