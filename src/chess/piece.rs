use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::coord::{Coord, DIAGONAL_STEPS, KING_STEPS, KNIGHT_DELTAS, ORTHOGONAL_STEPS};
use crate::error::ChessError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    White,
    Black,
}

impl Team {
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Team::White => Team::Black,
            Team::Black => Team::White,
        }
    }

    /// Row delta of a pawn advance.
    #[inline]
    pub fn forward(self) -> i8 {
        match self {
            Team::White => 1,
            Team::Black => -1,
        }
    }

    /// Row holding this team's rooks, knights, bishops, queen and king at the start.
    #[inline]
    pub fn back_rank(self) -> u8 {
        match self {
            Team::White => 1,
            Team::Black => 8,
        }
    }

    /// Row from which this team's pawns may advance two squares.
    #[inline]
    pub fn pawn_rank(self) -> u8 {
        match self {
            Team::White => 2,
            Team::Black => 7,
        }
    }

    /// Row on which this team's pawns promote: the opponent's back rank.
    #[inline]
    pub fn promotion_rank(self) -> u8 {
        self.other().back_rank()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceType {
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
    Pawn,
}

impl PieceType {
    pub const ALL: [PieceType; 6] = [
        PieceType::King,
        PieceType::Queen,
        PieceType::Bishop,
        PieceType::Knight,
        PieceType::Rook,
        PieceType::Pawn,
    ];

    /// Promotion choices, in the order moves are emitted.
    pub const PROMOTIONS: [PieceType; 4] = [
        PieceType::Queen,
        PieceType::Rook,
        PieceType::Bishop,
        PieceType::Knight,
    ];

    /// Step vectors for every piece except the pawn, whose geometry depends on its team.
    #[inline]
    pub fn step_dirs(self) -> &'static [Coord] {
        use PieceType::*;
        match self {
            King | Queen => &KING_STEPS,
            Bishop => &DIAGONAL_STEPS,
            Rook => &ORTHOGONAL_STEPS,
            Knight => &KNIGHT_DELTAS,
            Pawn => &[],
        }
    }

    /// True for pieces that keep stepping along a direction until blocked.
    #[inline]
    pub fn slides(self) -> bool {
        matches!(self, PieceType::Queen | PieceType::Bishop | PieceType::Rook)
    }

    /// Upper-case FEN letter.
    pub fn letter(self) -> char {
        match self {
            PieceType::King => 'K',
            PieceType::Queen => 'Q',
            PieceType::Bishop => 'B',
            PieceType::Knight => 'N',
            PieceType::Rook => 'R',
            PieceType::Pawn => 'P',
        }
    }

    /// Case-insensitive inverse of [`PieceType::letter`].
    pub fn from_letter(c: char) -> Result<Self, ChessError> {
        match c.to_ascii_uppercase() {
            'K' => Ok(PieceType::King),
            'Q' => Ok(PieceType::Queen),
            'B' => Ok(PieceType::Bishop),
            'N' => Ok(PieceType::Knight),
            'R' => Ok(PieceType::Rook),
            'P' => Ok(PieceType::Pawn),
            _ => Err(ChessError::ParsePiece(c)),
        }
    }
}

/// A piece: team plus type. It does not know its own square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub team: Team,
    pub kind: PieceType,
}

impl Piece {
    #[inline]
    pub const fn new(team: Team, kind: PieceType) -> Self {
        Self { team, kind }
    }

    /// FEN letter: upper case for white, lower case for black.
    pub fn fen_char(self) -> char {
        let c = self.kind.letter();
        match self.team {
            Team::White => c,
            Team::Black => c.to_ascii_lowercase(),
        }
    }

    pub fn from_fen_char(c: char) -> Result<Self, ChessError> {
        let kind = PieceType::from_letter(c)?;
        let team = if c.is_ascii_uppercase() {
            Team::White
        } else {
            Team::Black
        };
        Ok(Self { team, kind })
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fen_char())
    }
}
