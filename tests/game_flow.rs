//! Whole games played through the public API.

use chess_rules::board::prelude::*;
use chess_rules::SharedGame;

fn parse(text: &str) -> Move {
    let (from, to) = text.split_at(2);
    let (to, promo) = to.split_at(2);
    let (from, to): (Square, Square) = (from.parse().unwrap(), to.parse().unwrap());
    match promo.chars().next() {
        Some(c) => Move::promoting(from, to, PieceKind::from_char(c).unwrap()),
        None => Move::new(from, to),
    }
}

fn play(game: &mut Game, line: &str) {
    for text in line.split_whitespace() {
        if let Err(err) = game.make_move(parse(text)) {
            panic!("{text} rejected: {err}\n{}", game.board());
        }
    }
}

#[test]
fn italian_game_with_both_sides_castling() {
    let mut game = Game::new();
    play(&mut game, "e2e4 e7e5 g1f3 b8c6 f1c4 g8f6 e1g1 f8c5 d2d3 e8g8");

    let board = game.board();
    for (square, piece) in [
        ("g1", Piece::new(Color::White, PieceKind::King)),
        ("f1", Piece::new(Color::White, PieceKind::Rook)),
        ("g8", Piece::new(Color::Black, PieceKind::King)),
        ("f8", Piece::new(Color::Black, PieceKind::Rook)),
    ] {
        assert_eq!(board.get(square.parse().unwrap()), Some(piece), "{square}");
    }
    assert!(game.castling_rights().is_empty());
    assert_eq!(game.side_to_move(), Color::White);
    assert_eq!(game.status(Color::White), Status::Normal);
}

#[test]
fn en_passant_window_is_one_move() {
    let mut game = Game::new();
    play(&mut game, "e2e4 a7a6 e4e5 f7f5");
    let ep = parse("e5f6");
    assert!(game.legal_moves().contains(&ep));

    let mut taken = game.clone();
    taken.make_move(ep).unwrap();
    assert!(taken.board().is_empty("f5".parse().unwrap()));

    play(&mut game, "h2h3 h7h6");
    assert!(matches!(
        game.make_move(ep),
        Err(InvalidMove::Illegal { .. })
    ));
}

#[test]
fn fools_mate_ends_the_game() {
    let mut game = Game::new();
    play(&mut game, "f2f3 e7e5 g2g4 d8h4");
    assert_eq!(game.status(Color::White), Status::Checkmate);
    assert!(game.status(Color::White).is_game_over());
    assert!(game.legal_moves().is_empty());
}

#[test]
fn scholars_mate_attempt_defended() {
    let mut game = Game::new();
    play(&mut game, "e2e4 e7e5 f1c4 b8c6 d1h5 g7g6 h5f3 g8f6");
    assert_eq!(game.status(Color::White), Status::Normal);

    // The queen grabs the knight on f6 and is recaptured.
    play(&mut game, "f3f6 d8f6");
    assert_eq!(game.status(Color::White), Status::Normal);
}

#[test]
fn underpromotion_from_builder_position() {
    let mut game = GameBuilder::new()
        .piece("e1".parse().unwrap(), Color::White, PieceKind::King)
        .piece("b7".parse().unwrap(), Color::White, PieceKind::Pawn)
        .piece("h8".parse().unwrap(), Color::Black, PieceKind::King)
        .build();

    assert!(game.make_move(parse("b7b8")).is_err());
    play(&mut game, "b7b8r");
    assert_eq!(
        game.board().get("b8".parse().unwrap()),
        Some(Piece::new(Color::White, PieceKind::Rook))
    );
    assert_eq!(game.status(Color::Black), Status::Check);
}

#[test]
fn rejected_moves_report_why() {
    let mut game = Game::new();
    assert_eq!(
        game.make_move(parse("d4d5")).unwrap_err().to_string(),
        "No piece on d4"
    );
    assert!(matches!(
        game.make_move(parse("d7d5")),
        Err(InvalidMove::NotYourTurn { color: Color::Black, .. })
    ));
    assert_eq!(game, Game::new());
}

#[test]
fn shared_game_serializes_moves() {
    let shared = SharedGame::new();
    let black = shared.clone();

    shared.make_move(parse("e2e4")).unwrap();
    std::thread::spawn(move || black.make_move(parse("c7c5")).unwrap())
        .join()
        .unwrap();

    let snapshot = shared.snapshot();
    assert_eq!(snapshot.side_to_move(), Color::White);
    assert_eq!(snapshot.en_passant_target(), Some("c6".parse().unwrap()));
}
