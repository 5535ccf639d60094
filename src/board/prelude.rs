//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let game = Game::new();
//! assert_eq!(game.status(Color::White), Status::Normal);
//! ```

pub use super::{
    Board, CastleSide, CastlingRights, Color, Game, GameBuilder, InvalidMove, Move, MoveList,
    Piece, PieceKind, Square, SquareError, Status,
};
