//! Error types for board and game operations.

use thiserror::Error;

use super::{Color, Move, Square};

/// Why [`Game::make_move`](super::Game::make_move) rejected a move.
///
/// The game is left untouched whenever one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidMove {
    /// Nothing stands on the move's start square
    #[error("No piece on {square}")]
    EmptySquare { square: Square },

    /// The piece on the start square belongs to the side not on move
    #[error("Piece on {square} is {color}, but it is not {color}'s turn")]
    NotYourTurn { square: Square, color: Color },

    /// The move is not among the legal moves of the piece
    #[error("Illegal move {mv:?}")]
    Illegal { mv: Move },
}

/// Error type for square construction and parsing failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    #[error("Row {row} out of bounds (must be 1-8)")]
    RowOutOfBounds { row: u8 },

    #[error("Col {col} out of bounds (must be 1-8)")]
    ColOutOfBounds { col: u8 },

    #[error("Invalid square notation '{notation}'")]
    InvalidNotation { notation: String },
}
