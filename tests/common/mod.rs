#![allow(dead_code)]

use std::collections::HashSet;

use chess_core::{Board, Move, Piece, PieceType, Position, Team};

pub fn sq(row: u8, col: u8) -> Position {
    Position::new(row, col)
}

pub fn board_with(pieces: &[(Position, Team, PieceType)]) -> Board {
    let mut board = Board::new();
    for &(pos, team, kind) in pieces {
        board.place(pos, Piece::new(team, kind));
    }
    board
}

pub fn destinations(moves: &[Move]) -> HashSet<Position> {
    moves.iter().map(|m| m.to).collect()
}
