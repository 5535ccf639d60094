//! Core chess types.
//!
//! This module contains the value types the rules engine is built from:
//! - `Color`, `PieceKind` and `Piece` - sides and pieces
//! - `Square` - a 1-based (row, col) board coordinate
//! - `Move` and `MoveList` - move intent and fixed-capacity move storage
//! - `CastlingRights` and `CastleSide` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::{CastleSide, CastlingRights};
pub(crate) use castling::KING_HOME_COL;
pub use moves::{Move, MoveList, MoveListIntoIter};
pub use piece::{Color, Piece, PieceKind};
pub use square::Square;
