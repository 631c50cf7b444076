use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::chess::piece::PieceType;
use crate::core::position::Position;
use crate::error::ChessError;

/// A transition between two squares.
///
/// `promotion` is set only for a pawn move that lands on the opponent's back rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Position,
    pub to: Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion: Option<PieceType>,
}

impl Move {
    #[inline]
    pub const fn new(from: Position, to: Position) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    #[inline]
    pub const fn with_promotion(from: Position, to: Position, promotion: PieceType) -> Self {
        Self {
            from,
            to,
            promotion: Some(promotion),
        }
    }

    #[inline]
    pub fn is_promotion(&self) -> bool {
        self.promotion.is_some()
    }
}

impl fmt::Display for Move {
    /// UCI long algebraic: `e2e4`, `e7e8q`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(p) = self.promotion {
            write!(f, "{}", p.letter().to_ascii_lowercase())?;
        }
        Ok(())
    }
}

impl FromStr for Move {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ChessError::ParseMove(s.to_string());
        if !s.is_ascii() || !(s.len() == 4 || s.len() == 5) {
            return Err(bad());
        }
        let from: Position = s[0..2].parse().map_err(|_| bad())?;
        let to: Position = s[2..4].parse().map_err(|_| bad())?;
        let promotion = match s[4..].chars().next() {
            None => None,
            Some(c) => {
                let kind = PieceType::from_letter(c).map_err(|_| bad())?;
                if !PieceType::PROMOTIONS.contains(&kind) {
                    return Err(bad());
                }
                Some(kind)
            }
        };
        Ok(Self {
            from,
            to,
            promotion,
        })
    }
}
