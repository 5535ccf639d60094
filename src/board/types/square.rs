//! Square type and conversions.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the chess board as a 1-based (row, col) pair.
///
/// Row 1 is White's back rank and col 1 is the a-file. A `Square` is
/// always on the board: out-of-range coordinates are rejected before one
/// is ever constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "(u8, u8)", into = "(u8, u8)"))]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row >= 1 && row <= 8 && col >= 1 && col <= 8 {
            Some(Square { row, col })
        } else {
            None
        }
    }

    /// Create a square from coordinates known to be on the board.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside `1..=8`.
    #[must_use]
    pub const fn at(row: u8, col: u8) -> Self {
        assert!(row >= 1 && row <= 8, "row out of range");
        assert!(col >= 1 && col <= 8, "col out of range");
        Square { row, col }
    }

    /// Row (1-8, where 1 = White's back rank)
    #[inline]
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Column (1-8, where 1 = the a-file)
    #[inline]
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// The square `d_row` rows and `d_col` columns away, if it is on the board.
    #[inline]
    #[must_use]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (1..=8).contains(&row) && (1..=8).contains(&col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// All 64 squares, a1 first, then b1 ... h8.
    pub fn all() -> impl Iterator<Item = Square> {
        (1..=8u8).flat_map(|row| (1..=8u8).map(move |col| Square { row, col }))
    }

    #[inline]
    pub(crate) const fn row_index(self) -> usize {
        (self.row - 1) as usize
    }

    #[inline]
    pub(crate) const fn col_index(self) -> usize {
        (self.col - 1) as usize
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.col - 1 + b'a') as char, self.row)
    }
}

impl TryFrom<(u8, u8)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (u8, u8)) -> Result<Self, Self::Error> {
        if !(1..=8).contains(&row) {
            return Err(SquareError::RowOutOfBounds { row });
        }
        if !(1..=8).contains(&col) {
            return Err(SquareError::ColOutOfBounds { col });
        }
        Ok(Square { row, col })
    }
}

impl From<Square> for (u8, u8) {
    fn from(square: Square) -> Self {
        (square.row, square.col)
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let col = match bytes[0] {
            b'a'..=b'h' => bytes[0] - b'a' + 1,
            _ => return Err(invalid()),
        };
        let row = match bytes[1] {
            b'1'..=b'8' => bytes[1] - b'0',
            _ => return Err(invalid()),
        };
        Ok(Square { row, col })
    }
}
