//! Pseudo-legal move generation and the legality filter.
//!
//! Each piece kind has one pure function producing its pseudo-legal
//! destination set; the legality filter then applies the candidate to a
//! scratch copy of the board and rejects it if the mover's own king would be
//! attacked afterward.

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::board::Board;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Collect the pseudo-legal destinations of the piece on `from`.
///
/// Empty origins produce no destinations. Castling destinations carry their
/// full legality conditions already (see [`king`]); everything else still
/// needs the king-safety filter.
pub(crate) fn pseudo_legal_destinations(board: &Board, from: Square, buf: &mut Vec<Square>) {
    let Some(piece) = board.piece_at(from) else {
        return;
    };
    match piece.kind() {
        PieceKind::Pawn => pawns::destinations(board, from, piece.color(), buf),
        PieceKind::Knight => knights::destinations(board, from, piece.color(), buf),
        PieceKind::Bishop => {
            sliders::destinations(board, from, piece.color(), &sliders::BISHOP_DIRS, buf)
        }
        PieceKind::Rook => {
            sliders::destinations(board, from, piece.color(), &sliders::ROOK_DIRS, buf)
        }
        PieceKind::Queen => {
            sliders::destinations(board, from, piece.color(), &sliders::QUEEN_DIRS, buf)
        }
        PieceKind::King => king::destinations(board, from, piece, buf),
    }
}

/// Return `true` if `target` is attacked by any piece of `by`.
///
/// Attack patterns only: pawn forward pushes and castling do not attack.
pub(crate) fn is_square_attacked(board: &Board, target: Square, by: Color) -> bool {
    board.pieces_of(by).any(|(from, piece)| match piece.kind() {
        PieceKind::Pawn => pawns::attacks(from, by, target),
        PieceKind::Knight => knights::attacks(from, target),
        PieceKind::Bishop => sliders::attacks(board, from, target, &sliders::BISHOP_DIRS),
        PieceKind::Rook => sliders::attacks(board, from, target, &sliders::ROOK_DIRS),
        PieceKind::Queen => sliders::attacks(board, from, target, &sliders::QUEEN_DIRS),
        PieceKind::King => king::attacks(from, target),
    })
}

/// Return `true` if the given color's king is attacked.
///
/// A board without that king reports not-in-check; this arises only in
/// constructed positions and speculative simulation.
pub(crate) fn in_check(board: &Board, color: Color) -> bool {
    match board.find_king(color) {
        Some(king) => is_square_attacked(board, king, color.flip()),
        None => false,
    }
}

/// Return `true` if applying `from -> to` would leave `color`'s king attacked.
pub(crate) fn would_leave_in_check(board: &Board, from: Square, to: Square, color: Color) -> bool {
    let mut scratch = *board;
    apply(&mut scratch, from, to);
    in_check(&scratch, color)
}

/// Full legality: the origin holds a piece of the side to move, the
/// destination is in its pseudo-legal set, and the move does not leave the
/// mover's own king in check.
pub(crate) fn is_valid_move(board: &Board, from: Square, to: Square) -> bool {
    let Some(piece) = board.piece_at(from) else {
        return false;
    };
    if piece.color() != board.side_to_move() {
        return false;
    }
    let mut buf = Vec::new();
    pseudo_legal_destinations(board, from, &mut buf);
    buf.contains(&to) && !would_leave_in_check(board, from, to, piece.color())
}

/// Return `true` if at least one legal move exists for `color`.
///
/// Deliberately ignores whose turn it is, so checkmate and stalemate can be
/// queried for either side.
pub(crate) fn has_any_valid_moves(board: &Board, color: Color) -> bool {
    let mut buf = Vec::new();
    let froms: Vec<Square> = board.pieces_of(color).map(|(sq, _)| sq).collect();
    for from in froms {
        buf.clear();
        pseudo_legal_destinations(board, from, &mut buf);
        if buf
            .iter()
            .any(|&to| !would_leave_in_check(board, from, to, color))
        {
            return true;
        }
    }
    false
}

/// Return `true` if the piece on `sq` is a pawn standing on its final rank.
pub(crate) fn needs_promotion(board: &Board, sq: Square) -> bool {
    board
        .piece_at(sq)
        .is_some_and(|p| p.kind() == PieceKind::Pawn && sq.row() == p.color().promotion_row())
}

/// Everything the recorder needs to know about an applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AppliedMove {
    /// The moving piece as it stood on the origin square.
    pub piece: Piece,
    /// The removed piece and the square it was removed from. For en passant
    /// this is the bypassed pawn's square, not the destination.
    pub captured: Option<(Square, Piece)>,
    /// The move was a castle (the rook was relocated too).
    pub is_castling: bool,
    /// The move was an en passant capture.
    pub is_en_passant: bool,
}

/// Apply a validated move to the board: relocate the piece, remove the
/// captured piece, relocate the rook for castling, update the en passant
/// target, and switch the side to move.
///
/// Promotion is not applied here; the pawn stays on its final rank until the
/// session's `promote_pawn` resolves it.
///
/// # Panics
///
/// Expects a non-empty origin square; callers validate first.
pub(crate) fn apply(board: &mut Board, from: Square, to: Square) -> AppliedMove {
    let piece = board
        .piece_at(from)
        .expect("apply requires a piece on the origin square");
    let color = piece.color();

    // The target from the previous double push lives for exactly one ply.
    let prev_ep = board.en_passant_target();
    board.set_en_passant(None);

    let is_en_passant = piece.kind() == PieceKind::Pawn
        && prev_ep == Some(to)
        && from.col() != to.col()
        && board.piece_at(to).is_none();

    let captured = if is_en_passant {
        let bypassed = to
            .offset(-color.pawn_dir(), 0)
            .expect("en passant target has a square behind it");
        let pawn = board.piece_at(bypassed);
        board.set_piece(bypassed, None);
        pawn.map(|p| (bypassed, p))
    } else {
        board.piece_at(to).map(|p| (to, p))
    };

    board.set_piece(from, None);
    board.set_piece(to, Some(piece.marked_moved()));

    let is_castling = piece.kind() == PieceKind::King && from.col().abs_diff(to.col()) == 2;
    if is_castling {
        let row = from.row();
        let (rook_from, rook_to) = if to.col() == 6 {
            (Square::new(row, 7), Square::new(row, 5))
        } else {
            (Square::new(row, 0), Square::new(row, 3))
        };
        if let (Some(rook_from), Some(rook_to)) = (rook_from, rook_to)
            && let Some(rook) = board.piece_at(rook_from)
        {
            board.set_piece(rook_from, None);
            board.set_piece(rook_to, Some(rook.marked_moved()));
        }
    }

    // A double pawn push exposes the square it passed over for one ply.
    if piece.kind() == PieceKind::Pawn && from.row().abs_diff(to.row()) == 2 {
        board.set_en_passant(from.offset(color.pawn_dir(), 0));
    }

    board.set_side_to_move(color.flip());

    AppliedMove {
        piece,
        captured,
        is_castling,
        is_en_passant,
    }
}
