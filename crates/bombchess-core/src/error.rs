//! Error taxonomy for the engine.

use crate::color::Color;
use crate::square::Square;

/// Errors reported by the engine's public surface.
///
/// Bad caller input on the move-application path is always reported through
/// this type, never by panicking; the UI or relay layer decides what to show
/// or drop. Structural invariant violations (see [`Board::validate`]) mean a
/// programming error upstream and are debug-asserted instead.
///
/// [`Board::validate`]: crate::Board::validate
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Square coordinates outside the 8x8 board.
    #[error("square ({row}, {col}) is off the board")]
    OutOfRange {
        /// The requested row.
        row: i32,
        /// The requested column.
        col: i32,
    },
    /// The move fails validation; the game state is left unchanged.
    #[error("illegal move {from} to {to}")]
    IllegalMove {
        /// Origin square.
        from: Square,
        /// Destination square.
        to: Square,
    },
    /// No king of the given color is on the board.
    #[error("no {color} king on the board")]
    KingNotFound {
        /// The color whose king is missing.
        color: Color,
    },
    /// `promote_pawn` was called for a square with no pawn awaiting promotion,
    /// or with a kind that is not a legal promotion target.
    #[error("no promotable pawn on {square}")]
    InvalidPromotion {
        /// The square named in the promotion request.
        square: Square,
    },
    /// A pawn stands on its final rank and must be promoted before the next
    /// move is applied.
    #[error("promotion on {square} must be resolved first")]
    PromotionPending {
        /// The square holding the unpromoted pawn.
        square: Square,
    },
    /// The game result was already decided; it transitions out of
    /// `InProgress` exactly once.
    #[error("game result is already decided")]
    ResultAlreadySet,
    /// The game has ended; no further moves are accepted.
    #[error("game is over")]
    GameOver,
    /// The mine layout is fixed before the first move and cannot change.
    #[error("mine layout can only be set before the first move")]
    MinesFixed,
    /// A side has more than one king (structural invariant).
    #[error("found {count} {color} kings")]
    InvalidKingCount {
        /// The offending color.
        color: Color,
        /// Number of kings found.
        count: u32,
    },
    /// A side has more than 16 pieces (structural invariant).
    #[error("found {count} {color} pieces")]
    InvalidPieceCount {
        /// The offending color.
        color: Color,
        /// Number of pieces found.
        count: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::GameError;
    use crate::color::Color;
    use crate::square::Square;

    #[test]
    fn display_messages() {
        let err = GameError::OutOfRange { row: 9, col: -1 };
        assert_eq!(format!("{err}"), "square (9, -1) is off the board");

        let err = GameError::IllegalMove {
            from: Square::E2,
            to: Square::E5,
        };
        assert_eq!(format!("{err}"), "illegal move e2 to e5");

        let err = GameError::KingNotFound {
            color: Color::Black,
        };
        assert_eq!(format!("{err}"), "no black king on the board");
    }
}
