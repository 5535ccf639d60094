//! King-safety filtering and move validation.

use super::{mv, position, sq, squares, targets};
use crate::board::{Color, Game, InvalidMove, Move, PieceKind, Square};

#[test]
fn test_starting_position_has_twenty_moves() {
    let game = Game::new();
    let mut all = Vec::new();
    for (from, _) in game.board().pieces_of(Color::White) {
        all.extend(game.valid_moves(from).unwrap());
    }
    assert_eq!(all.len(), 20);

    let pawn_moves = all
        .iter()
        .filter(|m| game.board().get(m.start()).unwrap().kind == PieceKind::Pawn)
        .count();
    assert_eq!(pawn_moves, 16);

    let mut knight_targets: Vec<Square> = all
        .iter()
        .filter(|m| game.board().get(m.start()).unwrap().kind == PieceKind::Knight)
        .map(|m| m.end())
        .collect();
    knight_targets.sort();
    assert_eq!(knight_targets, squares(&["a3", "c3", "f3", "h3"]));
}

#[test]
fn test_valid_moves_on_empty_square_is_none() {
    assert!(Game::new().valid_moves(sq("e4")).is_none());
}

#[test]
fn test_pinned_rook_moves_only_along_pin() {
    let game = position("4r3/8/8/8/8/8/4R3/4K3", Color::White).build();
    let moves = game.valid_moves(sq("e2")).unwrap();
    assert_eq!(
        targets(&moves),
        squares(&["e3", "e4", "e5", "e6", "e7", "e8"])
    );
}

#[test]
fn test_pinned_knight_cannot_move() {
    let game = position("k7/8/8/8/q7/8/2N5/3K4", Color::White).build();
    assert!(game.valid_moves(sq("c2")).unwrap().is_empty());
}

#[test]
fn test_king_cannot_step_into_attack() {
    let game = position("k7/8/8/8/8/8/r7/4K3", Color::White).build();
    let moves = game.valid_moves(sq("e1")).unwrap();
    assert_eq!(targets(&moves), squares(&["d1", "f1"]));
}

#[test]
fn test_king_cannot_retreat_along_checking_ray() {
    let game = position("4r2k/8/8/8/8/8/8/4K3", Color::White).build();
    let moves = game.valid_moves(sq("e1")).unwrap();
    assert_eq!(targets(&moves), squares(&["d1", "d2", "f1", "f2"]));
}

#[test]
fn test_check_must_be_answered() {
    // Rook gives check on the e-file; only blocks, captures and king moves.
    let game = position("4r2k/8/8/8/8/8/3B4/R3K3", Color::White).build();
    assert!(game.is_in_check(Color::White));
    let legal = game.legal_moves();
    for m in legal.iter() {
        let mut next = game.clone();
        next.make_move(*m).unwrap();
        assert!(!next.is_in_check(Color::White), "{m:?} leaves king in check");
    }
    assert!(legal.contains(&mv("d2", "e3")));
    assert!(!legal.contains(&mv("a1", "a2")));
}

#[test]
fn test_filter_uses_piece_color_not_side_to_move() {
    // Black to move, but we ask about a pinned white piece.
    let game = position("4r3/8/8/8/8/8/4N3/4K3", Color::Black).build();
    assert!(game.valid_moves(sq("e2")).unwrap().is_empty());
}

#[test]
fn test_valid_moves_leaves_game_untouched() {
    let game = position("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R", Color::White)
        .castling(crate::board::CastlingRights::all())
        .build();
    let before = game.clone();
    for square in Square::all() {
        let _ = game.valid_moves(square);
    }
    assert_eq!(game, before);
}

#[test]
fn test_make_move_rejects_empty_square() {
    let mut game = Game::new();
    let before = game.clone();
    let err = game.make_move(mv("e4", "e5")).unwrap_err();
    assert_eq!(err, InvalidMove::EmptySquare { square: sq("e4") });
    assert_eq!(game, before);
}

#[test]
fn test_make_move_rejects_wrong_side() {
    let mut game = Game::new();
    let err = game.make_move(mv("e7", "e5")).unwrap_err();
    assert_eq!(
        err,
        InvalidMove::NotYourTurn {
            square: sq("e7"),
            color: Color::Black
        }
    );
    assert_eq!(game, Game::new());
}

#[test]
fn test_make_move_rejects_illegal_geometry() {
    let mut game = Game::new();
    let bad = mv("e2", "e5");
    assert_eq!(
        game.make_move(bad).unwrap_err(),
        InvalidMove::Illegal { mv: bad }
    );
    assert_eq!(game, Game::new());
}

#[test]
fn test_make_move_rejects_self_check() {
    let mut game = position("4r3/8/8/8/8/8/4B3/4K2k", Color::White).build();
    let before = game.clone();
    assert!(matches!(
        game.make_move(mv("e2", "d3")),
        Err(InvalidMove::Illegal { .. })
    ));
    assert_eq!(game, before);
}

#[test]
fn test_make_move_flips_turn_and_relocates() {
    let mut game = Game::new();
    game.make_move(mv("g1", "f3")).unwrap();
    assert_eq!(game.side_to_move(), Color::Black);
    assert!(game.board().is_empty(sq("g1")));
    assert_eq!(game.board().get(sq("f3")).unwrap().kind, PieceKind::Knight);
    assert_eq!(game.en_passant_target(), None);

    game.make_move(mv("b8", "c6")).unwrap();
    assert_eq!(game.side_to_move(), Color::White);
}

#[test]
fn test_set_side_to_move() {
    let mut game = Game::new();
    game.set_side_to_move(Color::Black);
    assert!(game.make_move(mv("e7", "e5")).is_ok());
    assert!(matches!(
        game.make_move(Move::new(sq("d7"), sq("d5"))),
        Err(InvalidMove::NotYourTurn { .. })
    ));
}

#[test]
fn test_crowded_board_lists_every_move() {
    // 26 queens: more legal moves than any reachable position holds.
    let game = position(
        "QQQQQQQQ/Q6Q/Q6Q/Q6Q/Q6Q/Q6Q/QQQQQQQQ/k1K5",
        Color::White,
    )
    .build();
    let legal = game.legal_moves();
    assert!(legal.len() > 256, "only {} moves", legal.len());
    assert_eq!(game.perft(1), legal.len() as u64);
    assert!(legal
        .iter()
        .all(|m| game.board().get(m.start()).unwrap().color == Color::White));
}
