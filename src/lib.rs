pub mod board;
pub mod sync;

pub use board::{Board, Color, Game, InvalidMove, Move, Piece, PieceKind, Square, Status};
pub use sync::SharedGame;
