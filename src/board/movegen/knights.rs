use super::super::{Board, Color, MoveList, Square};

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, -1),
    (2, 1),
    (-2, -1),
    (-2, 1),
    (1, -2),
    (1, 2),
    (-1, -2),
    (-1, 2),
];

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Square, color: Color) -> MoveList {
        self.generate_step_moves(from, color, &KNIGHT_OFFSETS)
    }
}
