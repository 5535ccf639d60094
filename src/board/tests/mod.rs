//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Pseudo-legal move generation per piece kind
//! - `legality.rs` - King-safety filtering, pins and make_move validation
//! - `special_moves.rs` - Castling, en passant and promotion
//! - `status.rs` - Check, checkmate and stalemate detection
//! - `perft.rs` - Move path counts against published values
//! - `proptest.rs` - Property-based tests

mod legality;

use crate::board::{Color, GameBuilder, Move, Piece, Square};

/// Builder holding the piece placement of a FEN-style diagram
/// (`rnbqkbnr/pppppppp/8/...`, rank 8 first) with `side` to move and no
/// castling rights.
pub(super) fn position(placement: &str, side: Color) -> GameBuilder {
    let mut builder = GameBuilder::new().side_to_move(side);
    for (idx, rank) in placement.split('/').enumerate() {
        let row = 8 - idx as u8;
        let mut col = 1u8;
        for c in rank.chars() {
            if let Some(skip) = c.to_digit(10) {
                col += skip as u8;
                continue;
            }
            let piece = Piece::from_char(c).unwrap_or_else(|| panic!("bad piece '{c}'"));
            builder = builder.piece(Square::at(row, col), piece.color, piece.kind);
            col += 1;
        }
    }
    builder
}

pub(super) fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

pub(super) fn mv(from: &str, to: &str) -> Move {
    Move::new(sq(from), sq(to))
}

/// Destination squares of `moves`, sorted and without promotion duplicates.
pub(super) fn targets<'a>(moves: impl IntoIterator<Item = &'a Move>) -> Vec<Square> {
    let mut out: Vec<Square> = moves.into_iter().map(|m| m.end()).collect();
    out.sort();
    out.dedup();
    out
}

pub(super) fn squares(names: &[&str]) -> Vec<Square> {
    let mut out: Vec<Square> = names.iter().map(|s| sq(s)).collect();
    out.sort();
    out
}
