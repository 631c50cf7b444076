//! Error type shared by the board, the text formats and move generation.

use crate::core::position::Position;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    /// A (row, column) pair outside `[1,8] x [1,8]`.
    #[error("square out of bounds: row={row}, col={col}")]
    OutOfBounds { row: i32, col: i32 },

    /// Move generation was asked for a square with no piece on it.
    #[error("no piece on {0}")]
    EmptySquare(Position),

    #[error("invalid square: {0:?}")]
    ParseSquare(String),

    #[error("invalid piece letter: {0:?}")]
    ParsePiece(char),

    #[error("invalid move: {0:?}")]
    ParseMove(String),

    #[error("invalid board: {0}")]
    ParseBoard(String),
}
