use std::ops::{Add, Mul, Neg};

/// A signed step on the board, in (row, column) order.
///
/// Positive `row` points toward row 8 (white's far side), positive `col`
/// toward column 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: i8,
    pub col: i8,
}

impl Coord {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn chebyshev_norm(self) -> i8 {
        self.row.abs().max(self.col.abs())
    }
}

impl Add for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: Coord) -> Self::Output {
        Coord::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Neg for Coord {
    type Output = Coord;

    #[inline]
    fn neg(self) -> Self::Output {
        Coord::new(-self.row, -self.col)
    }
}

impl Mul<i8> for Coord {
    type Output = Coord;

    #[inline]
    fn mul(self, rhs: i8) -> Coord {
        Coord {
            row: self.row * rhs,
            col: self.col * rhs,
        }
    }
}

pub const ORTHOGONAL_STEPS: [Coord; 4] = [
    Coord { row: 1, col: 0 },
    Coord { row: 0, col: 1 },
    Coord { row: -1, col: 0 },
    Coord { row: 0, col: -1 },
];

pub const DIAGONAL_STEPS: [Coord; 4] = [
    Coord { row: 1, col: 1 },
    Coord { row: -1, col: 1 },
    Coord { row: -1, col: -1 },
    Coord { row: 1, col: -1 },
];

/// The 8 king steps: diagonals first, then orthogonals.
pub const KING_STEPS: [Coord; 8] = [
    Coord { row: 1, col: 1 },
    Coord { row: -1, col: 1 },
    Coord { row: -1, col: -1 },
    Coord { row: 1, col: -1 },
    Coord { row: 1, col: 0 },
    Coord { row: 0, col: 1 },
    Coord { row: -1, col: 0 },
    Coord { row: 0, col: -1 },
];

pub const KNIGHT_DELTAS: [Coord; 8] = [
    Coord { row: 1, col: 2 },
    Coord { row: 2, col: 1 },
    Coord { row: -1, col: 2 },
    Coord { row: 2, col: -1 },
    Coord { row: 1, col: -2 },
    Coord { row: -2, col: 1 },
    Coord { row: -1, col: -2 },
    Coord { row: -2, col: -1 },
];
