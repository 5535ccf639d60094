use super::super::{Board, Color, MoveList, PieceKind, Square};

const KING_OFFSETS: [(i8, i8); 8] = [
    (1, -1),
    (1, 0),
    (1, 1),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

impl Board {
    /// One-square king moves. Castling depends on game history and is added
    /// by the game.
    pub(crate) fn generate_king_moves(&self, from: Square, color: Color) -> MoveList {
        self.generate_step_moves(from, color, &KING_OFFSETS)
    }

    /// True if any piece of `attacker` could capture on `square`.
    ///
    /// `square` must be empty or hold a piece of the other color. Pawns
    /// attack their forward diagonals whether or not anything stands there;
    /// every other piece attacks exactly where its pseudo-legal moves land.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, attacker: Color) -> bool {
        self.pieces_of(attacker).any(|(from, piece)| match piece.kind {
            PieceKind::Pawn => Board::pawn_attacks(from, attacker).any(|sq| sq == square),
            _ => self
                .pseudo_legal_moves(from)
                .iter()
                .any(|mv| mv.end() == square),
        })
    }

    /// True if `color`'s king is attacked.
    ///
    /// # Panics
    ///
    /// Panics if `color` has no king on the board.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        let Some(king_sq) = self.find_king(color) else {
            panic!("no {color} king on the board");
        };
        self.is_square_attacked(king_sq, color.opponent())
    }
}
