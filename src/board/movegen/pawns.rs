use super::super::{Board, Color, Move, MoveList, PieceKind, Square};

/// Push a pawn move, expanded into the four promotions on the first or last row.
fn push_pawn_move(moves: &mut MoveList, from: Square, to: Square) {
    if matches!(to.row(), 1 | 8) {
        for kind in PieceKind::PROMOTIONS {
            moves.push(Move::promoting(from, to, kind));
        }
    } else {
        moves.push(Move::new(from, to));
    }
}

impl Board {
    pub(crate) fn generate_pawn_moves(&self, from: Square, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        let dir = color.pawn_direction();
        let max_steps = if from.row() == color.pawn_start_row() {
            2
        } else {
            1
        };

        // Forward pushes stop at the first blocked square.
        let mut cursor = from;
        for _ in 0..max_steps {
            match cursor.offset(dir, 0) {
                Some(to) if self.is_empty(to) => {
                    push_pawn_move(&mut moves, from, to);
                    cursor = to;
                }
                _ => break,
            }
        }

        for d_col in [-1, 1] {
            if let Some(target) = from.offset(dir, d_col) {
                if self.get(target).is_some_and(|piece| piece.color != color) {
                    push_pawn_move(&mut moves, from, target);
                }
            }
        }

        moves
    }

    /// Squares a pawn of `color` on `from` attacks, occupied or not.
    pub(crate) fn pawn_attacks(from: Square, color: Color) -> impl Iterator<Item = Square> {
        let dir = color.pawn_direction();
        [-1, 1]
            .into_iter()
            .filter_map(move |d_col| from.offset(dir, d_col))
    }
}
