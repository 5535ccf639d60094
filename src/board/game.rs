//! The rules engine: legal moves, move application and game status.

use log::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::types::KING_HOME_COL;
use super::{Board, CastleSide, CastlingRights, Color, Move, MoveList, Piece, PieceKind, Square};

/// How a side stands in the current position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Status {
    Normal,
    Check,
    Checkmate,
    Stalemate,
}

impl Status {
    /// True for checkmate and stalemate
    #[must_use]
    pub const fn is_game_over(self) -> bool {
        matches!(self, Status::Checkmate | Status::Stalemate)
    }
}

/// A chess game: one board plus the side to move and the history the rules
/// need (en-passant target and castling rights).
///
/// Every query is computed to completion on `&self`; legality checks run on
/// scratch copies of the board, so no caller ever observes a half-applied
/// move.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) castling_rights: CastlingRights,
}

impl Game {
    /// A game in the standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        Game {
            board: Board::standard(),
            side_to_move: Color::White,
            en_passant_target: None,
            castling_rights: CastlingRights::all(),
        }
    }

    /// A game on an arbitrary board, White to move, nothing moved yet.
    #[must_use]
    pub fn with_board(board: Board) -> Self {
        let mut game = Game::new();
        game.set_board(board);
        game
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Replace the position.
    ///
    /// The loaded board is treated as a fresh start: every castling right is
    /// restored (castling still needs king and rook on their home squares)
    /// and the en-passant target is cleared. The side to move is kept.
    pub fn set_board(&mut self, board: Board) {
        debug!("loading board\n{board}");
        self.board = board;
        self.en_passant_target = None;
        self.castling_rights = CastlingRights::all();
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    /// The square a pawn skipped over on the previous half-move, if any.
    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    /// Legal moves of the piece on `from`, or `None` if the square is empty.
    ///
    /// Pseudo-legal moves plus any available en-passant capture and castling
    /// move, keeping only those that leave the piece's own king safe.
    #[must_use]
    pub fn valid_moves(&self, from: Square) -> Option<MoveList> {
        let piece = self.board.get(from)?;
        let mut moves = self.board.pseudo_legal_moves(from);

        if let Some(ep) = self.en_passant_move(from, piece) {
            moves.push(ep);
        }
        self.push_castling_moves(from, piece, &mut moves);

        moves.retain(|mv| {
            let safe = self.leaves_king_safe(mv, piece.color);
            if !safe {
                trace!("{mv:?} would leave the {} king in check", piece.color);
            }
            safe
        });
        Some(moves)
    }

    /// Legal moves of every piece of the side to move.
    ///
    /// Unbounded: a crowded board loaded through `set_board` can hold more
    /// moves than any position reachable from the start.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        self.legal_moves_of(self.side_to_move)
    }

    fn legal_moves_of(&self, color: Color) -> Vec<Move> {
        self.board
            .pieces_of(color)
            .filter_map(|(from, _)| self.valid_moves(from))
            .flatten()
            .collect()
    }

    fn has_legal_move(&self, color: Color) -> bool {
        self.board
            .pieces_of(color)
            .any(|(from, _)| self.valid_moves(from).is_some_and(|moves| !moves.is_empty()))
    }

    /// True if `color`'s king is attacked by any opposing piece.
    ///
    /// # Panics
    ///
    /// Panics if `color` has no king on the board.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.board.is_in_check(color)
    }

    /// In check with no legal move.
    #[must_use]
    pub fn is_in_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_legal_move(color)
    }

    /// Not in check, yet no legal move.
    #[must_use]
    pub fn is_in_stalemate(&self, color: Color) -> bool {
        !self.is_in_check(color) && !self.has_legal_move(color)
    }

    /// Classify `color`'s position.
    #[must_use]
    pub fn status(&self, color: Color) -> Status {
        match (self.is_in_check(color), self.has_legal_move(color)) {
            (true, true) => Status::Check,
            (true, false) => Status::Checkmate,
            (false, true) => Status::Normal,
            (false, false) => Status::Stalemate,
        }
    }

    /// Apply `mv` to a scratch copy of the board and test the king there.
    fn leaves_king_safe(&self, mv: Move, color: Color) -> bool {
        let mut scratch = self.board.clone();
        scratch.play_unchecked(mv, self.en_passant_target);
        !scratch.is_in_check(color)
    }

    /// En-passant capture for a pawn beside the pawn that just double-stepped.
    fn en_passant_move(&self, from: Square, piece: Piece) -> Option<Move> {
        let target = self.en_passant_target?;
        if piece.kind != PieceKind::Pawn || !self.board.is_empty(target) {
            return None;
        }
        let forward = from.offset(piece.color.pawn_direction(), 0)?;
        if forward.row() != target.row() || target.col().abs_diff(from.col()) != 1 {
            return None;
        }
        let victim = Square::new(from.row(), target.col())?;
        match self.board.get(victim) {
            Some(p) if p.kind == PieceKind::Pawn && p.color != piece.color => {
                Some(Move::new(from, target))
            }
            _ => None,
        }
    }

    /// Castling moves for an unmoved king that is not in check.
    fn push_castling_moves(&self, from: Square, piece: Piece, moves: &mut MoveList) {
        if piece.kind != PieceKind::King {
            return;
        }
        let color = piece.color;
        let row = color.back_row();
        if from != Square::at(row, KING_HOME_COL) {
            return;
        }
        let enemy = color.opponent();
        if self.board.is_square_attacked(from, enemy) {
            return;
        }

        for side in CastleSide::BOTH {
            if !self.castling_rights.has(color, side) {
                continue;
            }
            let rook_home = side.rook_home(color);
            if self.board.get(rook_home) != Some(Piece::new(color, PieceKind::Rook)) {
                continue;
            }

            let (low, high) = if side.rook_home_col() < KING_HOME_COL {
                (side.rook_home_col(), KING_HOME_COL)
            } else {
                (KING_HOME_COL, side.rook_home_col())
            };
            let blocked = (low + 1..high).any(|col| !self.board.is_empty(Square::at(row, col)));
            if blocked {
                continue;
            }

            // Start square was checked above; the king also crosses the
            // rook's landing square and ends on its own.
            let path = [side.rook_target_col(), side.king_target_col()];
            if path
                .iter()
                .any(|&col| self.board.is_square_attacked(Square::at(row, col), enemy))
            {
                continue;
            }

            moves.push(Move::new(from, Square::at(row, side.king_target_col())));
        }
    }

    /// Count leaf nodes of the legal move tree to `depth`.
    #[must_use]
    pub fn perft(&self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        moves
            .iter()
            .map(|&mv| {
                let mut next = self.clone();
                next.apply_legal(mv);
                next.perft(depth - 1)
            })
            .sum()
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
