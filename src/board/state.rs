use std::fmt;

use once_cell::sync::Lazy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Piece, PieceKind, Square};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

static STANDARD_LAYOUT: Lazy<Board> = Lazy::new(|| {
    let mut board = Board::empty();
    for (col, kind) in (1..=8u8).zip(BACK_RANK) {
        for color in Color::BOTH {
            board.place(
                Square::at(color.back_row(), col),
                Piece::new(color, kind),
            );
            board.place(
                Square::at(color.pawn_start_row(), col),
                Piece::new(color, PieceKind::Pawn),
            );
        }
    }
    board
});

/// An 8x8 grid mapping each square to an optional piece.
///
/// The board owns placement only and knows nothing about the rules. Two
/// boards are equal iff every square holds an equal optional piece.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// A board with no pieces on it.
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// The standard 32-piece starting layout.
    #[must_use]
    pub fn standard() -> Self {
        STANDARD_LAYOUT.clone()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.row_index()][square.col_index()]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Put `piece` on `square`, replacing whatever stood there.
    #[inline]
    pub fn place(&mut self, square: Square, piece: Piece) {
        self.squares[square.row_index()][square.col_index()] = Some(piece);
    }

    /// Clear `square`, returning the piece that stood there (if any).
    #[inline]
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.row_index()][square.col_index()].take()
    }

    /// Reset to the standard starting layout.
    pub fn reset(&mut self) {
        self.squares = STANDARD_LAYOUT.squares;
    }

    /// Every occupied square with its piece, a1 first.
    pub fn iter(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|piece| (sq, piece)))
    }

    /// Every square holding a piece of `color`.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.iter().filter(move |(_, piece)| piece.color == color)
    }

    /// Full-board scan for `color`'s king.
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        let king = Piece::new(color, PieceKind::King);
        self.iter()
            .find(|&(_, piece)| piece == king)
            .map(|(sq, _)| sq)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::standard()
    }
}

/// Text diagram with rank 8 on top; uppercase is White, `.` is empty.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (1..=8u8).rev() {
            write!(f, "{row} ")?;
            for col in 1..=8u8 {
                let c = self.get(Square::at(row, col)).map_or('.', Piece::to_char);
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "  abcdefgh")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board")?;
        fmt::Display::fmt(self, f)
    }
}
