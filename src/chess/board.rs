use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::chess::layout::starting_placements;
use crate::chess::piece::{Piece, Team};
use crate::core::position::{Position, BOARD_SIZE, SQUARE_COUNT};
use crate::error::ChessError;

/// Piece storage for all 64 squares.
///
/// Every square always has an entry; empty squares hold `None`. Equality and
/// hashing compare every square.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "BoardSnapshot", from = "BoardSnapshot")]
pub struct Board {
    squares: [Option<Piece>; SQUARE_COUNT],
}

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Self {
            squares: [None; SQUARE_COUNT],
        }
    }

    /// A board in the standard starting position.
    pub fn standard() -> Self {
        let mut board = Self::new();
        board.reset();
        board
    }

    /// Clears the board, then places the standard 32-piece opening arrangement.
    pub fn reset(&mut self) {
        self.clear();
        for team in [Team::White, Team::Black] {
            for (sq, piece) in starting_placements(team) {
                self.place(sq, piece);
            }
        }
        debug!("board reset to starting position");
    }

    pub fn clear(&mut self) {
        self.squares = [None; SQUARE_COUNT];
    }

    /// Puts `piece` on `pos`, overwriting whatever was there.
    #[inline]
    pub fn place(&mut self, pos: Position, piece: Piece) {
        self.squares[pos.index()] = Some(piece);
    }

    /// Empties `pos`, returning the piece that stood there.
    #[inline]
    pub fn remove(&mut self, pos: Position) -> Option<Piece> {
        self.squares[pos.index()].take()
    }

    #[inline]
    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        self.squares[pos.index()]
    }

    #[inline]
    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.piece_at(pos).is_none()
    }

    /// Occupied squares in index order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    pub fn piece_count(&self) -> usize {
        self.squares.iter().filter(|s| s.is_some()).count()
    }

    /// Parses the piece-placement field of a FEN record, e.g.
    /// `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR`.
    pub fn from_fen_placement(fen: &str) -> Result<Self, ChessError> {
        let ranks: Vec<&str> = fen.split('/').collect();
        if ranks.len() != BOARD_SIZE as usize {
            return Err(ChessError::ParseBoard(format!(
                "expected {BOARD_SIZE} ranks, found {}",
                ranks.len()
            )));
        }

        let mut board = Self::new();
        for (i, rank) in ranks.iter().enumerate() {
            let row = BOARD_SIZE as i32 - i as i32;
            let mut col = 1i32;
            for c in rank.chars() {
                if let Some(skip) = c.to_digit(10) {
                    if skip == 0 || skip > BOARD_SIZE as u32 {
                        return Err(ChessError::ParseBoard(format!("bad empty-run {c:?} in rank {row}")));
                    }
                    col += skip as i32;
                    continue;
                }
                let piece = Piece::from_fen_char(c)?;
                let sq = Position::try_new(row, col)
                    .map_err(|_| ChessError::ParseBoard(format!("rank {row} is too long")))?;
                board.place(sq, piece);
                col += 1;
            }
            if col != BOARD_SIZE as i32 + 1 {
                return Err(ChessError::ParseBoard(format!(
                    "rank {row} covers {} squares",
                    col - 1
                )));
            }
        }
        debug!("parsed board with {} pieces", board.piece_count());
        Ok(board)
    }

    pub fn to_fen_placement(&self) -> String {
        let mut out = String::new();
        for row in (1..=BOARD_SIZE).rev() {
            let mut empty = 0;
            for col in 1..=BOARD_SIZE {
                match self.piece_at(Position::new(row, col)) {
                    Some(p) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(p.fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if row > 1 {
                out.push('/');
            }
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    /// Row 8 at the top, `.` for empty squares.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (1..=BOARD_SIZE).rev() {
            for col in 1..=BOARD_SIZE {
                let c = self
                    .piece_at(Position::new(row, col))
                    .map_or('.', Piece::fen_char);
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A single occupied square in a [`BoardSnapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub square: Position,
    pub piece: Piece,
}

/// Serialized form of a [`Board`]: occupied squares only, in index order.
///
/// When a square appears more than once, the last entry wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub pieces: Vec<Placement>,
}

impl From<Board> for BoardSnapshot {
    fn from(board: Board) -> Self {
        let pieces = board
            .iter()
            .map(|(square, piece)| Placement { square, piece })
            .collect();
        Self { pieces }
    }
}

impl From<BoardSnapshot> for Board {
    fn from(snapshot: BoardSnapshot) -> Self {
        let mut board = Board::new();
        for p in snapshot.pieces {
            board.place(p.square, p.piece);
        }
        board
    }
}
