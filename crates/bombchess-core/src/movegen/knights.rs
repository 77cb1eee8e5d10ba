//! Knight moves.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;

/// The eight knight jump offsets as (row, col) deltas.
const OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Collect the pseudo-legal destinations of a knight on `from`.
pub(super) fn destinations(board: &Board, from: Square, color: Color, buf: &mut Vec<Square>) {
    for (dr, dc) in OFFSETS {
        if let Some(target) = from.offset(dr, dc)
            && board.piece_at(target).is_none_or(|p| p.color() != color)
        {
            buf.push(target);
        }
    }
}

/// Return `true` if a knight on `from` attacks `target`.
pub(super) fn attacks(from: Square, target: Square) -> bool {
    OFFSETS.iter().any(|&(dr, dc)| from.offset(dr, dc) == Some(target))
}
