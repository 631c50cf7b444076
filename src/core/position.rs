use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::coord::Coord;
use crate::error::ChessError;

/// Number of rows (and columns) on the board.
pub const BOARD_SIZE: u8 = 8;

/// Number of squares on the board.
pub const SQUARE_COUNT: usize = 64;

/// One of the 64 board squares, 1-indexed.
///
/// Row 1 is white's back rank, column 1 is the a-file. A `Position` is always
/// on the board: out-of-range pairs are rejected at construction.
///
/// Ordering is row-major from (1,1), which matches [`Position::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Panics if `row` or `col` is outside `1..=8`. Use [`Position::try_new`]
    /// for unchecked input.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row >= 1 && row <= BOARD_SIZE && col >= 1 && col <= BOARD_SIZE);
        Self { row, col }
    }

    pub fn try_new(row: i32, col: i32) -> Result<Self, ChessError> {
        if Self::in_range(row) && Self::in_range(col) {
            Ok(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(ChessError::OutOfBounds { row, col })
        }
    }

    #[inline]
    fn in_range(v: i32) -> bool {
        (1..=BOARD_SIZE as i32).contains(&v)
    }

    #[inline]
    pub fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub fn col(self) -> u8 {
        self.col
    }

    #[inline]
    pub fn to_array(self) -> [u8; 2] {
        [self.row, self.col]
    }

    /// Dense index in `0..64`, row-major from (1,1).
    #[inline]
    pub fn index(self) -> usize {
        (self.row as usize - 1) * BOARD_SIZE as usize + (self.col as usize - 1)
    }

    /// Inverse of [`Position::index`]. `None` for `index >= 64`.
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= SQUARE_COUNT {
            return None;
        }
        let size = BOARD_SIZE as usize;
        Some(Self {
            row: (index / size) as u8 + 1,
            col: (index % size) as u8 + 1,
        })
    }

    /// The square `delta` away from this one, or `None` if it falls off the board.
    #[inline]
    pub fn offset(self, delta: Coord) -> Option<Self> {
        Self::try_new(
            self.row as i32 + delta.row as i32,
            self.col as i32 + delta.col as i32,
        )
        .ok()
    }

    /// All 64 squares in index order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..SQUARE_COUNT).filter_map(Position::from_index)
    }
}

impl TryFrom<[i32; 2]> for Position {
    type Error = ChessError;

    fn try_from(pos: [i32; 2]) -> Result<Self, Self::Error> {
        Position::try_new(pos[0], pos[1])
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col - 1) as char;
        write!(f, "{file}{}", self.row)
    }
}

impl FromStr for Position {
    type Err = ChessError;

    /// Algebraic notation: file `a..h`, rank `1..8`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ChessError::ParseSquare(s.to_string());
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(bad());
        };
        if !('a'..='h').contains(&file) {
            return Err(bad());
        }
        let rank = rank.to_digit(10).ok_or_else(bad)? as i32;
        let col = (file as u8 - b'a') as i32 + 1;
        Position::try_new(rank, col).map_err(|_| bad())
    }
}

impl TryFrom<String> for Position {
    type Error = ChessError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Position> for String {
    fn from(pos: Position) -> String {
        pos.to_string()
    }
}
