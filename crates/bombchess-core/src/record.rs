//! Move history entries and the game result.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// One applied move, append-only.
///
/// The history is an ordered sequence whose index is the ply number; entries
/// are never reordered or rewritten after the ply completes (a pending
/// promotion finishes its own ply's entry).
///
/// With the `serde` feature enabled the record (de)serializes with these
/// exact field names, which is the stable encoding callers use to persist or
/// replay games.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveRecord {
    /// Origin square.
    pub from: Square,
    /// Destination square.
    pub to: Square,
    /// Kind of the moving piece (pre-promotion).
    pub piece: PieceKind,
    /// Color of the moving piece.
    pub color: Color,
    /// A piece was removed from the board.
    pub is_capture: bool,
    /// The move was a castle.
    pub is_castling: bool,
    /// The move was an en passant capture.
    pub is_en_passant: bool,
    /// The pawn was promoted at the end of this ply.
    pub is_promotion: bool,
    /// The promotion target, if any.
    pub promotion: Option<PieceKind>,
    /// The move left the opponent in check.
    pub is_check: bool,
    /// The move checkmated the opponent.
    pub is_checkmate: bool,
    /// The destination square hid a mine, which detonated.
    pub triggered_mine: bool,
    /// Rendered algebraic notation.
    pub notation: String,
}

/// The result of a game, set exactly once when it leaves `InProgress`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameResult {
    InProgress,
    WhiteWins,
    BlackWins,
    Draw,
    WhiteResigns,
    BlackResigns,
    WhiteTimeout,
    BlackTimeout,
}

impl GameResult {
    /// Return `true` once the game has ended.
    #[inline]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameResult::InProgress)
    }

    /// The winning color, if the result has one.
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameResult::WhiteWins | GameResult::BlackResigns | GameResult::BlackTimeout => {
                Some(Color::White)
            }
            GameResult::BlackWins | GameResult::WhiteResigns | GameResult::WhiteTimeout => {
                Some(Color::Black)
            }
            GameResult::InProgress | GameResult::Draw => None,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::InProgress => write!(f, "Game in progress"),
            GameResult::WhiteWins => write!(f, "White wins"),
            GameResult::BlackWins => write!(f, "Black wins"),
            GameResult::Draw => write!(f, "Draw"),
            GameResult::WhiteResigns => write!(f, "White resigns - Black wins"),
            GameResult::BlackResigns => write!(f, "Black resigns - White wins"),
            GameResult::WhiteTimeout => write!(f, "White ran out of time - Black wins"),
            GameResult::BlackTimeout => write!(f, "Black ran out of time - White wins"),
        }
    }
}
