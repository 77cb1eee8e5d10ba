//! King moves: single steps and castling.

use crate::board::Board;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use super::is_square_attacked;
use super::sliders::QUEEN_DIRS;

/// One castling corridor: the rook's home square, the king's destination,
/// the squares that must be empty, and the squares the king crosses
/// (destination included) that must not be attacked.
struct CastleLane {
    rook: Square,
    dest: Square,
    empty: &'static [Square],
    transit: &'static [Square],
}

const WHITE_LANES: [CastleLane; 2] = [
    CastleLane {
        rook: Square::H1,
        dest: Square::G1,
        empty: &[Square::F1, Square::G1],
        transit: &[Square::F1, Square::G1],
    },
    CastleLane {
        rook: Square::A1,
        dest: Square::C1,
        empty: &[Square::B1, Square::C1, Square::D1],
        transit: &[Square::D1, Square::C1],
    },
];

const BLACK_LANES: [CastleLane; 2] = [
    CastleLane {
        rook: Square::H8,
        dest: Square::G8,
        empty: &[Square::F8, Square::G8],
        transit: &[Square::F8, Square::G8],
    },
    CastleLane {
        rook: Square::A8,
        dest: Square::C8,
        empty: &[Square::B8, Square::C8, Square::D8],
        transit: &[Square::D8, Square::C8],
    },
];

/// Collect the pseudo-legal destinations of a king on `from`.
///
/// Castling destinations are only emitted when fully legal: both pieces
/// unmoved, the corridor empty, and neither the king's square nor any square
/// it crosses attacked.
pub(super) fn destinations(board: &Board, from: Square, piece: Piece, buf: &mut Vec<Square>) {
    let color = piece.color();
    for &(dr, dc) in &QUEEN_DIRS {
        if let Some(target) = from.offset(dr, dc)
            && board.piece_at(target).is_none_or(|p| p.color() != color)
        {
            buf.push(target);
        }
    }
    castle_destinations(board, from, piece, buf);
}

fn castle_destinations(board: &Board, from: Square, piece: Piece, buf: &mut Vec<Square>) {
    let color = piece.color();
    let (home, lanes) = match color {
        Color::White => (Square::E1, &WHITE_LANES),
        Color::Black => (Square::E8, &BLACK_LANES),
    };
    if piece.has_moved() || from != home {
        return;
    }
    // Castling out of check is never legal.
    if is_square_attacked(board, from, color.flip()) {
        return;
    }

    for lane in lanes {
        let rook_ok = board
            .piece_at(lane.rook)
            .is_some_and(|r| r.is(PieceKind::Rook, color) && !r.has_moved());
        if !rook_ok {
            continue;
        }
        if lane.empty.iter().any(|&sq| board.piece_at(sq).is_some()) {
            continue;
        }
        if lane
            .transit
            .iter()
            .any(|&sq| is_square_attacked(board, sq, color.flip()))
        {
            continue;
        }
        buf.push(lane.dest);
    }
}

/// Return `true` if a king on `from` attacks `target` (adjacency).
pub(super) fn attacks(from: Square, target: Square) -> bool {
    let dr = from.row().abs_diff(target.row());
    let dc = from.col().abs_diff(target.col());
    dr <= 1 && dc <= 1 && (dr, dc) != (0, 0)
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::color::Color;
    use crate::movegen::pseudo_legal_destinations;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    fn destinations(board: &Board, from: Square) -> Vec<Square> {
        let mut buf = Vec::new();
        pseudo_legal_destinations(board, from, &mut buf);
        buf
    }

    /// White king on e1 and rooks on a1/h1, all unmoved, plus a black king.
    fn castle_board() -> Board {
        let mut board = Board::empty();
        board.set_piece(Square::E1, Some(Piece::new(PieceKind::King, Color::White)));
        board.set_piece(Square::A1, Some(Piece::new(PieceKind::Rook, Color::White)));
        board.set_piece(Square::H1, Some(Piece::new(PieceKind::Rook, Color::White)));
        board.set_piece(Square::E8, Some(Piece::new(PieceKind::King, Color::Black)));
        board
    }

    #[test]
    fn central_king_has_eight_steps() {
        let mut board = Board::empty();
        board.set_piece(Square::D4, Some(Piece::new(PieceKind::King, Color::White)));
        assert_eq!(destinations(&board, Square::D4).len(), 8);
    }

    #[test]
    fn both_castles_available_on_clear_board() {
        let board = castle_board();
        let dests = destinations(&board, Square::E1);
        assert!(dests.contains(&Square::G1));
        assert!(dests.contains(&Square::C1));
    }

    #[test]
    fn castle_blocked_by_intervening_piece() {
        let mut board = castle_board();
        board.set_piece(Square::B1, Some(Piece::new(PieceKind::Knight, Color::White)));
        let dests = destinations(&board, Square::E1);
        assert!(dests.contains(&Square::G1));
        assert!(!dests.contains(&Square::C1));
    }

    #[test]
    fn castle_denied_after_king_moved() {
        let mut board = castle_board();
        let king = Piece::new(PieceKind::King, Color::White).marked_moved();
        board.set_piece(Square::E1, Some(king));
        let dests = destinations(&board, Square::E1);
        assert!(!dests.contains(&Square::G1));
        assert!(!dests.contains(&Square::C1));
    }

    #[test]
    fn castle_denied_after_rook_moved() {
        let mut board = castle_board();
        let rook = Piece::new(PieceKind::Rook, Color::White).marked_moved();
        board.set_piece(Square::H1, Some(rook));
        let dests = destinations(&board, Square::E1);
        assert!(!dests.contains(&Square::G1));
        assert!(dests.contains(&Square::C1));
    }

    #[test]
    fn castle_denied_while_in_check() {
        let mut board = castle_board();
        board.set_piece(Square::E5, Some(Piece::new(PieceKind::Rook, Color::Black)));
        let dests = destinations(&board, Square::E1);
        assert!(!dests.contains(&Square::G1));
        assert!(!dests.contains(&Square::C1));
    }

    #[test]
    fn castle_denied_through_attacked_square() {
        // Black rook on f5 attacks f1: the king may not cross it, even though
        // e1 and g1 themselves are safe.
        let mut board = castle_board();
        board.set_piece(Square::F5, Some(Piece::new(PieceKind::Rook, Color::Black)));
        let dests = destinations(&board, Square::E1);
        assert!(!dests.contains(&Square::G1));
        // The queenside corridor d1/c1 is unaffected.
        assert!(dests.contains(&Square::C1));
    }

    #[test]
    fn queenside_b_file_attack_does_not_matter() {
        // b1 must be empty but the king never crosses it, so an attack on b1
        // does not forbid queenside castling.
        let mut board = castle_board();
        board.set_piece(Square::B5, Some(Piece::new(PieceKind::Rook, Color::Black)));
        let dests = destinations(&board, Square::E1);
        assert!(dests.contains(&Square::C1));
    }

    #[test]
    fn king_attacks() {
        use super::attacks;
        assert!(attacks(Square::E1, Square::D1));
        assert!(attacks(Square::E1, Square::D2));
        assert!(attacks(Square::E1, Square::E2));
        assert!(!attacks(Square::E1, Square::E1));
        assert!(!attacks(Square::E1, Square::E3));
    }
}
