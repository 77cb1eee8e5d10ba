//! Full-game scenarios exercising the public session API.

use bombchess_core::{Board, Color, Game, GameResult, Piece, PieceKind, Square};

fn play(game: &mut Game, moves: &[(Square, Square)]) {
    for &(from, to) in moves {
        game.move_piece(from, to)
            .unwrap_or_else(|err| panic!("move {from} -> {to} rejected: {err}"));
    }
}

#[test]
fn initial_position_census() {
    let game = Game::new();
    assert_eq!(game.current_player(), Color::White);
    assert_eq!(game.en_passant_target(), None);
    let mut white = 0;
    let mut black = 0;
    for sq in Square::all() {
        match game.piece_at(sq).map(|p| p.color()) {
            Some(Color::White) => white += 1,
            Some(Color::Black) => black += 1,
            None => {}
        }
    }
    assert_eq!(white, 16);
    assert_eq!(black, 16);
}

#[test]
fn fools_mate_ends_in_black_win() {
    let mut game = Game::new();
    play(
        &mut game,
        &[
            (Square::F2, Square::F3),
            (Square::E7, Square::E5),
            (Square::G2, Square::G4),
            (Square::D8, Square::H4),
        ],
    );
    assert!(game.is_checkmate(Color::White));
    assert_eq!(game.result(), GameResult::BlackWins);
    assert_eq!(game.result_string(), "Black wins");
    assert_eq!(
        game.all_move_notations(),
        vec!["f3", "e5", "g4", "Qh4#"]
    );
}

#[test]
fn scholars_mate_ends_in_white_win() {
    let mut game = Game::new();
    play(
        &mut game,
        &[
            (Square::E2, Square::E4),
            (Square::E7, Square::E5),
            (Square::F1, Square::C4),
            (Square::B8, Square::C6),
            (Square::D1, Square::H5),
            (Square::G8, Square::F6),
            (Square::H5, Square::F7),
        ],
    );
    assert!(game.is_checkmate(Color::Black));
    assert_eq!(game.result(), GameResult::WhiteWins);
    assert_eq!(game.move_history().last().unwrap().notation, "Qxf7#");
}

#[test]
fn no_move_leaks_captures() {
    // Piece count plus captured count stays exactly 16 per side.
    let mut game = Game::new();
    let moves = [
        (Square::E2, Square::E4),
        (Square::D7, Square::D5),
        (Square::E4, Square::D5),
        (Square::D8, Square::D5),
        (Square::B1, Square::C3),
        (Square::D5, Square::D8),
    ];
    for &(from, to) in &moves {
        game.move_piece(from, to).unwrap();
        for color in Color::ALL {
            let on_board = Square::all()
                .filter(|&sq| game.piece_at(sq).is_some_and(|p| p.color() == color))
                .count();
            let captured = game.captured_pieces(color).len();
            assert_eq!(on_board + captured, 16, "material leak for {color}");
        }
    }
}

#[test]
fn en_passant_destination_is_empty_before_capture() {
    let mut game = Game::new();
    play(
        &mut game,
        &[
            (Square::E2, Square::E4),
            (Square::A7, Square::A6),
            (Square::E4, Square::E5),
            (Square::D7, Square::D5),
        ],
    );
    assert_eq!(game.en_passant_target(), Some(Square::D6));
    assert!(game.piece_at(Square::D6).is_none());

    game.move_piece(Square::E5, Square::D6).unwrap();
    // The bypassed pawn went away, not a destination occupant.
    assert!(game.piece_at(Square::D5).is_none());
    assert_eq!(game.captured_pieces(Color::Black).len(), 1);
    assert!(game.captured_pieces(Color::Black)[0].is(PieceKind::Pawn, Color::Black));
}

#[test]
fn castling_rejected_when_transit_square_attacked() {
    let mut board = Board::empty();
    board.set_piece(Square::E1, Some(Piece::new(PieceKind::King, Color::White)));
    board.set_piece(Square::H1, Some(Piece::new(PieceKind::Rook, Color::White)));
    board.set_piece(Square::E8, Some(Piece::new(PieceKind::King, Color::Black)));
    // The rook on f5 covers f1; e1 and g1 themselves are safe.
    board.set_piece(Square::F5, Some(Piece::new(PieceKind::Rook, Color::Black)));
    let game = Game::with_board(board);
    assert!(!game.is_valid_move(Square::E1, Square::G1));
    // A plain king step to d1 is still fine.
    assert!(game.is_valid_move(Square::E1, Square::D1));
}

#[test]
fn capture_down_to_bare_kings_is_a_draw() {
    let mut board = Board::empty();
    board.set_piece(Square::E4, Some(Piece::new(PieceKind::King, Color::White)));
    board.set_piece(Square::E5, Some(Piece::new(PieceKind::Pawn, Color::Black)));
    board.set_piece(Square::A8, Some(Piece::new(PieceKind::King, Color::Black)));
    let mut game = Game::with_board(board);

    game.move_piece(Square::E4, Square::E5).unwrap();
    assert!(game.is_insufficient_material());
    assert_eq!(game.result(), GameResult::Draw);
}

/// Re-apply a recorded notation sequence to a fresh game, selecting each
/// move purely by its rendered notation.
fn replay_by_notation(notations: &[String]) -> Game {
    let mut game = Game::new();
    for target in notations {
        let chosen = find_move_rendering(&game, target)
            .unwrap_or_else(|| panic!("no legal move renders {target}"));
        game = chosen;
    }
    game
}

fn find_move_rendering(game: &Game, target: &str) -> Option<Game> {
    let promotion = promotion_in(target);
    for from in Square::all() {
        for to in Square::all() {
            if !game.is_valid_move(from, to) {
                continue;
            }
            let mut trial = game.clone();
            trial.move_piece(from, to).ok()?;
            if trial.needs_promotion(to) {
                let Some(kind) = promotion else {
                    continue;
                };
                trial.promote_pawn(to, kind).ok()?;
            }
            if trial.move_history().last().is_some_and(|r| r.notation == target) {
                return Some(trial);
            }
        }
    }
    None
}

fn promotion_in(notation: &str) -> Option<PieceKind> {
    let idx = notation.find('=')?;
    match notation[idx + 1..].chars().next()? {
        'N' => Some(PieceKind::Knight),
        'B' => Some(PieceKind::Bishop),
        'R' => Some(PieceKind::Rook),
        'Q' => Some(PieceKind::Queen),
        _ => None,
    }
}

#[test]
fn notation_replay_reproduces_the_position() {
    let mut game = Game::new();
    play(
        &mut game,
        &[
            (Square::E2, Square::E4),
            (Square::D7, Square::D5),
            (Square::E4, Square::D5),
            (Square::D8, Square::D5),
            (Square::B1, Square::C3),
            (Square::D5, Square::D8),
            (Square::G1, Square::F3),
            (Square::G8, Square::F6),
            (Square::F1, Square::C4),
            (Square::E7, Square::E6),
            (Square::E1, Square::G1),
            (Square::F8, Square::E7),
            (Square::D2, Square::D4),
            (Square::E8, Square::G8),
        ],
    );
    let notations = game.all_move_notations();
    assert_eq!(notations[10], "O-O");
    assert_eq!(notations[13], "O-O");

    let replayed = replay_by_notation(&notations);
    assert_eq!(replayed.board(), game.board());
    assert_eq!(replayed.all_move_notations(), notations);
    assert_eq!(replayed.current_player(), game.current_player());
}

#[test]
fn notation_replay_handles_promotion() {
    let mut game = Game::new();
    play(
        &mut game,
        &[
            (Square::A2, Square::A4),
            (Square::B7, Square::B5),
            (Square::A4, Square::B5),
            (Square::A7, Square::A6),
            (Square::B5, Square::A6),
            (Square::B8, Square::C6),
            (Square::A6, Square::A7),
            (Square::A8, Square::B8),
        ],
    );
    game.move_piece(Square::A7, Square::B8).unwrap();
    game.promote_pawn(Square::B8, PieceKind::Queen).unwrap();
    let last = game.move_history().last().unwrap();
    assert!(last.is_promotion);
    assert!(last.is_capture);
    assert_eq!(last.notation, "axb8=Q");

    let notations = game.all_move_notations();
    let replayed = replay_by_notation(&notations);
    assert_eq!(replayed.board(), game.board());
    assert_eq!(replayed.all_move_notations(), notations);
}
