//! Fluent builder for constructing game positions.
//!
//! Allows creating positions piece by piece, together with the history the
//! rules need (side to move, castling rights, en-passant target).
//!
//! # Example
//! ```
//! use chess_rules::board::{CastleSide, Color, GameBuilder, PieceKind, Square};
//!
//! let game = GameBuilder::new()
//!     .piece(Square::at(1, 5), Color::White, PieceKind::King)
//!     .piece(Square::at(1, 8), Color::White, PieceKind::Rook)
//!     .piece(Square::at(8, 5), Color::Black, PieceKind::King)
//!     .castle(Color::White, CastleSide::King)
//!     .side_to_move(Color::White)
//!     .build();
//! assert_eq!(game.legal_moves().len(), 15);
//! ```

use super::{Board, CastleSide, CastlingRights, Color, Game, Piece, PieceKind, Square};

/// A fluent builder for constructing `Game` positions.
#[derive(Clone, Debug)]
pub struct GameBuilder {
    board: Board,
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GameBuilder {
    /// Create a new empty board builder with no castling rights.
    #[must_use]
    pub fn new() -> Self {
        GameBuilder {
            board: Board::empty(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        GameBuilder {
            board: Board::standard(),
            castling_rights: CastlingRights::all(),
            ..Self::new()
        }
    }

    /// Place a piece on the board, replacing any existing piece there.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.board.place(square, Piece::new(color, kind));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.board.remove(square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Replace all castling rights.
    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling_rights = rights;
        self
    }

    /// Enable one castling right.
    #[must_use]
    pub fn castle(mut self, color: Color, side: CastleSide) -> Self {
        self.castling_rights.set(color, side);
        self
    }

    /// Disable all castling rights.
    #[must_use]
    pub const fn no_castling_rights(mut self) -> Self {
        self.castling_rights = CastlingRights::none();
        self
    }

    /// Set the en passant target square.
    #[must_use]
    pub const fn en_passant(mut self, target: Square) -> Self {
        self.en_passant_target = Some(target);
        self
    }

    /// Build the game.
    #[must_use]
    pub fn build(self) -> Game {
        Game {
            board: self.board,
            side_to_move: self.side_to_move,
            en_passant_target: self.en_passant_target,
            castling_rights: self.castling_rights,
        }
    }
}
