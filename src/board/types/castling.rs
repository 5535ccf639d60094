//! Castling rights type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;
use super::square::Square;

const CASTLE_WHITE_K: u8 = 1 << 0;
const CASTLE_WHITE_Q: u8 = 1 << 1;
const CASTLE_BLACK_K: u8 = 1 << 2;
const CASTLE_BLACK_Q: u8 = 1 << 3;

const ALL_CASTLING_RIGHTS: u8 = CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// Column the king starts on and castles from.
pub(crate) const KING_HOME_COL: u8 = 5;

/// The wing a king castles towards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    King,
    Queen,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::King, CastleSide::Queen];

    /// Column of this wing's rook before castling
    #[inline]
    #[must_use]
    pub const fn rook_home_col(self) -> u8 {
        match self {
            CastleSide::King => 8,
            CastleSide::Queen => 1,
        }
    }

    /// Column the king lands on
    #[inline]
    #[must_use]
    pub const fn king_target_col(self) -> u8 {
        match self {
            CastleSide::King => 7,
            CastleSide::Queen => 3,
        }
    }

    /// Column the rook lands on: the square the king passes over
    #[inline]
    #[must_use]
    pub const fn rook_target_col(self) -> u8 {
        match self {
            CastleSide::King => 6,
            CastleSide::Queen => 4,
        }
    }

    /// Which wing a two-column king move from the home column goes to.
    #[must_use]
    pub(crate) fn from_king_move(start: Square, end: Square) -> Option<CastleSide> {
        if start.row() != end.row() || start.col() != KING_HOME_COL {
            return None;
        }
        match end.col() {
            7 => Some(CastleSide::King),
            3 => Some(CastleSide::Queen),
            _ => None,
        }
    }

    /// Home square of `color`'s rook on this wing
    #[must_use]
    pub const fn rook_home(self, color: Color) -> Square {
        Square::at(color.back_row(), self.rook_home_col())
    }
}

/// Castling rights represented as a bitmask.
///
/// A right survives only while the king and the rook of that wing have
/// never left their home squares and the rook has not been captured there.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All castling rights (both sides can castle kingside and queenside)
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    /// Check if a specific castling right is set
    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.0 & Self::bit_for(color, side) != 0
    }

    /// Set a specific castling right
    #[inline]
    pub fn set(&mut self, color: Color, side: CastleSide) {
        self.0 |= Self::bit_for(color, side);
    }

    /// Remove a specific castling right
    #[inline]
    pub fn remove(&mut self, color: Color, side: CastleSide) {
        self.0 &= !Self::bit_for(color, side);
    }

    /// Remove both of `color`'s rights (its king has moved)
    #[inline]
    pub fn remove_color(&mut self, color: Color) {
        for side in CastleSide::BOTH {
            self.remove(color, side);
        }
    }

    /// Drop the right tied to a rook home square, if `square` is one.
    pub(crate) fn touch(&mut self, square: Square) {
        for color in Color::BOTH {
            for side in CastleSide::BOTH {
                if side.rook_home(color) == square {
                    self.remove(color, side);
                }
            }
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    const fn bit_for(color: Color, side: CastleSide) -> u8 {
        match (color, side) {
            (Color::White, CastleSide::King) => CASTLE_WHITE_K,
            (Color::White, CastleSide::Queen) => CASTLE_WHITE_Q,
            (Color::Black, CastleSide::King) => CASTLE_BLACK_K,
            (Color::Black, CastleSide::Queen) => CASTLE_BLACK_Q,
        }
    }
}
