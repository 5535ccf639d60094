//! Chess board representation and rules.
//!
//! A mailbox board with per-piece pseudo-legal move generation, wrapped by
//! a `Game` that filters moves for king safety, handles castling, en passant
//! and promotion, and classifies check, checkmate and stalemate.
//!
//! # Example
//! ```
//! use chess_rules::board::{Color, Game, Move, Square, Status};
//!
//! let mut game = Game::new();
//! let moves = game.legal_moves();
//! println!("Starting position has {} legal moves", moves.len());
//!
//! game.make_move(Move::new(Square::at(2, 5), Square::at(4, 5))).unwrap();
//! assert_eq!(game.side_to_move(), Color::Black);
//! assert_eq!(game.status(Color::Black), Status::Normal);
//! ```

mod builder;
mod error;
mod game;
mod make_move;
mod movegen;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::GameBuilder;
pub use error::{InvalidMove, SquareError};
pub use game::{Game, Status};
pub use state::Board;
pub use types::{
    CastleSide, CastlingRights, Color, Move, MoveList, MoveListIntoIter, Piece, PieceKind, Square,
};
