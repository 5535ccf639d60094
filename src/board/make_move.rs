use log::debug;

use super::error::InvalidMove;
use super::{Board, CastleSide, Game, Move, Piece, PieceKind, Square};

/// What a move did to the board besides relocating the mover.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct MoveEffects {
    pub(crate) captured: Option<Piece>,
    pub(crate) en_passant_victim: Option<Square>,
    pub(crate) castled: Option<CastleSide>,
}

impl Board {
    /// Relocate the piece on `mv.start()` without any legality check,
    /// resolving en passant, castling and promotion along the way.
    ///
    /// Used on scratch copies by the legality filter and on the real board
    /// once a move has been validated.
    pub(crate) fn play_unchecked(
        &mut self,
        mv: Move,
        en_passant_target: Option<Square>,
    ) -> MoveEffects {
        let mut effects = MoveEffects::default();
        let (start, end) = (mv.start(), mv.end());
        let Some(piece) = self.remove(start) else {
            return effects;
        };

        effects.captured = self.remove(end);

        match piece.kind {
            PieceKind::Pawn
                if effects.captured.is_none()
                    && Some(end) == en_passant_target
                    && start.col() != end.col() =>
            {
                // The double-stepped pawn sits beside the mover, not on `end`.
                let victim = Square::at(start.row(), end.col());
                effects.captured = self.remove(victim);
                effects.en_passant_victim = Some(victim);
            }
            PieceKind::King => {
                if let Some(side) = CastleSide::from_king_move(start, end) {
                    let rook_to = Square::at(start.row(), side.rook_target_col());
                    if let Some(rook) = self.remove(side.rook_home(piece.color)) {
                        self.place(rook_to, rook);
                    }
                    effects.castled = Some(side);
                }
            }
            _ => {}
        }

        let placed = match mv.promotion() {
            Some(kind) => Piece::new(piece.color, kind),
            None => piece,
        };
        self.place(end, placed);
        effects
    }
}

impl Game {
    /// Play `mv` for the side to move.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] if the start square is empty, holds a piece of
    /// the side not on move, or `mv` is not one of that piece's legal moves.
    /// The game is unchanged on error.
    pub fn make_move(&mut self, mv: Move) -> Result<(), InvalidMove> {
        let start = mv.start();
        let piece = self
            .board
            .get(start)
            .ok_or(InvalidMove::EmptySquare { square: start })?;
        if piece.color != self.side_to_move {
            return Err(InvalidMove::NotYourTurn {
                square: start,
                color: piece.color,
            });
        }
        let legal = self.valid_moves(start).unwrap_or_default();
        if !legal.contains(&mv) {
            return Err(InvalidMove::Illegal { mv });
        }

        self.apply_legal(mv);
        Ok(())
    }

    /// Apply a move already known to be legal and advance the turn.
    pub(crate) fn apply_legal(&mut self, mv: Move) {
        let Some(piece) = self.board.get(mv.start()) else {
            return;
        };
        let effects = self.board.play_unchecked(mv, self.en_passant_target);

        if piece.kind == PieceKind::King {
            self.castling_rights.remove_color(piece.color);
        }
        self.castling_rights.touch(mv.start());
        self.castling_rights.touch(mv.end());

        self.en_passant_target = None;
        if piece.kind == PieceKind::Pawn && mv.start().row().abs_diff(mv.end().row()) == 2 {
            let skipped = (mv.start().row() + mv.end().row()) / 2;
            self.en_passant_target = Square::new(skipped, mv.start().col());
        }

        debug!(
            "{} played {:?}{}{}{}",
            piece.color,
            mv,
            effects
                .captured
                .map(|p| format!(" capturing {:?}", p.kind))
                .unwrap_or_default(),
            effects
                .en_passant_victim
                .map(|sq| format!(" en passant on {sq}"))
                .unwrap_or_default(),
            effects
                .castled
                .map(|side| format!(" castling {side:?}side"))
                .unwrap_or_default(),
        );

        self.side_to_move = self.side_to_move.opponent();
    }
}
