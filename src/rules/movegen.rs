//! Pseudo-legal move generation.
//!
//! Moves respect each piece's geometry and board occupancy only: whether a
//! move leaves the mover's own king attacked is left to the caller.
//!
//! Output order is deterministic: direction-table order, then distance. Pawns
//! emit the straight advance (one square, then two), then the left and right
//! captures; promotions come in [`PieceType::PROMOTIONS`] order.

use log::trace;

use crate::chess::board::Board;
use crate::chess::chess_move::Move;
use crate::chess::piece::{Piece, PieceType, Team};
use crate::core::coord::Coord;
use crate::core::position::Position;
use crate::error::ChessError;

/// All pseudo-legal moves of the piece standing on `from`.
///
/// Returns [`ChessError::EmptySquare`] if `from` holds no piece.
pub fn piece_moves(board: &Board, from: Position) -> Result<Vec<Move>, ChessError> {
    let piece = board.piece_at(from).ok_or(ChessError::EmptySquare(from))?;
    let mut out = Vec::new();
    gen_piece(board, from, piece, &mut out);
    trace!("{} on {from}: {} moves", piece, out.len());
    Ok(out)
}

/// Pseudo-legal moves for every piece of `team`, in square-index order.
pub fn team_moves(board: &Board, team: Team) -> Vec<Move> {
    let mut out = Vec::new();
    for (sq, piece) in board.iter().filter(|(_, p)| p.team == team) {
        gen_piece(board, sq, piece, &mut out);
    }
    trace!("{team:?}: {} moves", out.len());
    out
}

fn gen_piece(board: &Board, from: Position, piece: Piece, out: &mut Vec<Move>) {
    match piece.kind {
        PieceType::Pawn => gen_pawn(board, from, piece.team, out),
        PieceType::Bishop | PieceType::Rook | PieceType::Queen => {
            gen_steps(board, from, piece.team, piece.kind.step_dirs(), true, out)
        }
        PieceType::Knight | PieceType::King => {
            gen_steps(board, from, piece.team, piece.kind.step_dirs(), false, out)
        }
    }
}

/// Walks each direction from `from`. Empty squares are recorded and, if
/// `slides`, walked through; an enemy square is recorded and ends the ray; a
/// friendly square ends the ray unrecorded.
fn gen_steps(
    board: &Board,
    from: Position,
    team: Team,
    dirs: &[Coord],
    slides: bool,
    out: &mut Vec<Move>,
) {
    for &dir in dirs {
        let mut cur = from.offset(dir);
        while let Some(sq) = cur {
            match board.piece_at(sq) {
                None => out.push(Move::new(from, sq)),
                Some(p) => {
                    if p.team != team {
                        out.push(Move::new(from, sq));
                    }
                    break;
                }
            }
            if !slides {
                break;
            }
            cur = sq.offset(dir);
        }
    }
}

fn gen_pawn(board: &Board, from: Position, team: Team, out: &mut Vec<Move>) {
    let forward = Coord::new(team.forward(), 0);

    // straight advance
    if let Some(one) = from.offset(forward).filter(|&sq| board.is_empty_at(sq)) {
        push_pawn_move(from, one, team, out);
        if from.row() == team.pawn_rank() {
            if let Some(two) = from.offset(forward * 2).filter(|&sq| board.is_empty_at(sq)) {
                push_pawn_move(from, two, team, out);
            }
        }
    }

    // diagonal captures, left then right
    for side in [-1, 1] {
        let Some(to) = from.offset(forward + Coord::new(0, side)) else {
            continue;
        };
        if board.piece_at(to).is_some_and(|p| p.team != team) {
            push_pawn_move(from, to, team, out);
        }
    }
}

fn push_pawn_move(from: Position, to: Position, team: Team, out: &mut Vec<Move>) {
    if to.row() == team.promotion_rank() {
        out.extend(
            PieceType::PROMOTIONS
                .iter()
                .map(|&kind| Move::with_promotion(from, to, kind)),
        );
    } else {
        out.push(Move::new(from, to));
    }
}
