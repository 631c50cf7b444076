//! Chess pieces, moves and the board.

pub mod board;
pub mod chess_move;
pub mod layout;
pub mod piece;
