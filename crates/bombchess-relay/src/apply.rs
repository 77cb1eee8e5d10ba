//! Applying decoded messages to a game session.

use tracing::debug;

use bombchess_core::{Color, Game, MineField, PieceKind, Square};

use crate::error::RelayError;
use crate::message::Message;

/// What applying a message did to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    /// A move (and its promotion, if any) was applied.
    Move {
        /// The rendered notation of the applied move.
        notation: String,
    },
    /// The mine layout was installed.
    MinesPlaced {
        /// Number of mines in the layout.
        count: usize,
    },
    /// The sender resigned.
    Resigned(Color),
}

/// Apply a decoded message to the session through the engine's own entry
/// points.
///
/// `sender` identifies which peer the message came from; the transport layer
/// knows this, the message itself does not carry it. Moves are validated by
/// the engine exactly as local input would be, so a malformed or illegal
/// remote move is rejected without touching the session.
pub fn apply_message(
    game: &mut Game,
    message: &Message,
    sender: Color,
) -> Result<Applied, RelayError> {
    match message {
        Message::Move {
            from_row,
            from_col,
            to_row,
            to_col,
            promotion,
        } => {
            let from = Square::from_coords(*from_row, *from_col)?;
            let to = Square::from_coords(*to_row, *to_col)?;
            let promotion = promotion
                .map(|value| {
                    PieceKind::from_wire(value)
                        .filter(|kind| kind.is_promotion_target())
                        .ok_or(RelayError::InvalidPromotion { value })
                })
                .transpose()?;

            // A move onto the final rank leaves the ply open until promoted,
            // so the promotion piece must be known before anything mutates.
            let promotes = game.piece_at(from).is_some_and(|p| {
                p.kind() == PieceKind::Pawn && to.row() == p.color().promotion_row()
            });
            if promotes && promotion.is_none() {
                return Err(RelayError::MissingPromotion);
            }

            game.move_piece(from, to)?;
            if let Some(kind) = promotion
                && game.needs_promotion(to)
            {
                game.promote_pawn(to, kind)?;
            }

            let notation = game
                .move_history()
                .last()
                .map(|r| r.notation.clone())
                .unwrap_or_default();
            debug!(%from, %to, %notation, "peer move applied");
            Ok(Applied::Move { notation })
        }

        Message::Mines { positions } => {
            let mut squares = Vec::with_capacity(positions.len());
            for pos in positions {
                squares.push(Square::from_coords(pos.row, pos.col)?);
            }
            let field = MineField::from_positions(squares);
            let count = field.len();
            game.set_minefield(field)?;
            debug!(count, "mine layout installed");
            Ok(Applied::MinesPlaced { count })
        }

        Message::Surrender => {
            game.resign(sender)?;
            Ok(Applied::Resigned(sender))
        }
    }
}
