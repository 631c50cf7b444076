use crate::chess::piece::{Piece, PieceType, Team};
use crate::core::position::{Position, BOARD_SIZE};

/// Back-rank piece types by column, a-file first:
///
/// `R N B Q K B N R`
pub const BACK_RANK: [PieceType; BOARD_SIZE as usize] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// The 16 starting placements for one team: back rank, then pawns, each by column.
///
/// Black mirrors white across the board's horizontal midline.
pub fn starting_placements(team: Team) -> impl Iterator<Item = (Position, Piece)> {
    let back = BACK_RANK
        .iter()
        .enumerate()
        .map(move |(i, &kind)| (Position::new(team.back_rank(), i as u8 + 1), Piece::new(team, kind)));
    let pawns = (1..=BOARD_SIZE)
        .map(move |col| (Position::new(team.pawn_rank(), col), Piece::new(team, PieceType::Pawn)));
    back.chain(pawns)
}
