//! Pawn moves: pushes, diagonal captures, and en passant.

use crate::board::Board;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Collect the pseudo-legal destinations of a pawn on `from`.
pub(super) fn destinations(board: &Board, from: Square, color: Color, buf: &mut Vec<Square>) {
    let dir = color.pawn_dir();

    // Forward pushes: one square, or two from the home row, both unblocked.
    if let Some(one) = from.offset(dir, 0)
        && board.piece_at(one).is_none()
    {
        buf.push(one);
        if from.row() == color.pawn_home_row()
            && let Some(two) = one.offset(dir, 0)
            && board.piece_at(two).is_none()
        {
            buf.push(two);
        }
    }

    // Diagonal captures, including en passant onto the stored target square.
    for dc in [-1, 1] {
        let Some(target) = from.offset(dir, dc) else {
            continue;
        };
        if board.piece_at(target).is_some_and(|p| p.color() != color) {
            buf.push(target);
        } else if board.en_passant_target() == Some(target) && bypassed_enemy_pawn(board, target, color) {
            buf.push(target);
        }
    }
}

/// The en passant target is only capturable while the bypassed enemy pawn
/// still stands behind it.
fn bypassed_enemy_pawn(board: &Board, target: Square, color: Color) -> bool {
    target
        .offset(-color.pawn_dir(), 0)
        .and_then(|sq| board.piece_at(sq))
        .is_some_and(|p| p.is(PieceKind::Pawn, color.flip()))
}

/// Return `true` if a pawn of `color` on `from` attacks `target`.
///
/// Only the two diagonal squares count; forward pushes are not attacks.
pub(super) fn attacks(from: Square, color: Color, target: Square) -> bool {
    let dir = color.pawn_dir();
    from.offset(dir, -1) == Some(target) || from.offset(dir, 1) == Some(target)
}
