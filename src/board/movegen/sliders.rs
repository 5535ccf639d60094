use super::super::{Board, Color, Move, MoveList, Square};

const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Type of sliding piece for move generation
#[derive(Clone, Copy, Debug)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl SliderType {
    const fn directions(self) -> &'static [(i8, i8)] {
        match self {
            SliderType::Bishop => &DIAGONAL,
            SliderType::Rook => &ORTHOGONAL,
            SliderType::Queen => &ALL_DIRECTIONS,
        }
    }
}

impl Board {
    /// Walk each ray until the edge, a friendly piece (excluded) or an enemy
    /// piece (included as a capture).
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        color: Color,
        slider: SliderType,
    ) -> MoveList {
        let mut moves = MoveList::new();
        for &(d_row, d_col) in slider.directions() {
            let mut cursor = from;
            while let Some(to) = cursor.offset(d_row, d_col) {
                match self.get(to) {
                    None => moves.push(Move::new(from, to)),
                    Some(piece) => {
                        if piece.color != color {
                            moves.push(Move::new(from, to));
                        }
                        break;
                    }
                }
                cursor = to;
            }
        }
        moves
    }
}
