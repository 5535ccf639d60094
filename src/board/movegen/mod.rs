//! Pseudo-legal move generation.
//!
//! Every generator here obeys piece geometry and board occupancy only; none
//! of them asks whether the mover's king is left in check. That filter, and
//! the history-dependent moves (castling, en passant), live in the game.

mod kings;
mod knights;
mod pawns;
mod sliders;

use sliders::SliderType;

use super::{Board, Color, Move, MoveList, PieceKind, Square};

impl Board {
    /// Pseudo-legal moves of the piece on `from`; empty if the square is empty.
    #[must_use]
    pub fn pseudo_legal_moves(&self, from: Square) -> MoveList {
        let Some(piece) = self.get(from) else {
            return MoveList::new();
        };
        match piece.kind {
            PieceKind::Pawn => self.generate_pawn_moves(from, piece.color),
            PieceKind::Knight => self.generate_knight_moves(from, piece.color),
            PieceKind::Bishop => self.generate_slider_moves(from, piece.color, SliderType::Bishop),
            PieceKind::Rook => self.generate_slider_moves(from, piece.color, SliderType::Rook),
            PieceKind::Queen => self.generate_slider_moves(from, piece.color, SliderType::Queen),
            PieceKind::King => self.generate_king_moves(from, piece.color),
        }
    }

    /// True if `to` is empty or holds a piece `color` may capture.
    #[inline]
    fn is_open_for(&self, to: Square, color: Color) -> bool {
        self.get(to).map_or(true, |piece| piece.color != color)
    }

    /// Single-step moves (knight, king) to each on-board, non-friendly offset.
    fn generate_step_moves(&self, from: Square, color: Color, offsets: &[(i8, i8)]) -> MoveList {
        let mut moves = MoveList::new();
        for &(d_row, d_col) in offsets {
            if let Some(to) = from.offset(d_row, d_col) {
                if self.is_open_for(to, color) {
                    moves.push(Move::new(from, to));
                }
            }
        }
        moves
    }
}
