//! Board storage and pseudo-legal move generation for standard chess.
//!
//! Legality against king safety, castling, en passant and turn order belong
//! to the caller; this crate only answers "where can this piece go".

pub mod core;
pub mod chess;
pub mod rules;
pub mod error;

pub use crate::chess::board::Board;
pub use crate::chess::chess_move::Move;
pub use crate::chess::piece::{Piece, PieceType, Team};
pub use crate::core::position::Position;
pub use crate::error::ChessError;
pub use crate::rules::movegen::{piece_moves, team_moves};
