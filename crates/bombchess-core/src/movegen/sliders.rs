//! Sliding pieces: bishops, rooks, and queens as ray walks.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;

/// Diagonal ray directions.
pub(super) const BISHOP_DIRS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Orthogonal ray directions.
pub(super) const ROOK_DIRS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// All eight ray directions.
pub(super) const QUEEN_DIRS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Collect the pseudo-legal destinations of a slider on `from`, walking each
/// ray until the edge or the first occupied square (included when enemy).
pub(super) fn destinations(
    board: &Board,
    from: Square,
    color: Color,
    dirs: &[(i8, i8)],
    buf: &mut Vec<Square>,
) {
    for &(dr, dc) in dirs {
        let mut current = from;
        while let Some(next) = current.offset(dr, dc) {
            match board.piece_at(next) {
                None => buf.push(next),
                Some(p) => {
                    if p.color() != color {
                        buf.push(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }
}

/// Return `true` if a slider on `from` attacks `target` along one of `dirs`
/// with no intervening piece.
pub(super) fn attacks(board: &Board, from: Square, target: Square, dirs: &[(i8, i8)]) -> bool {
    for &(dr, dc) in dirs {
        let mut current = from;
        while let Some(next) = current.offset(dr, dc) {
            if next == target {
                return true;
            }
            if board.piece_at(next).is_some() {
                break;
            }
            current = next;
        }
    }
    false
}
