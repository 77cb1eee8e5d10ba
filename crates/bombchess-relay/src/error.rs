//! Relay-boundary errors.

use bombchess_core::GameError;

/// Errors raised while decoding or applying a peer message.
///
/// A failed message is reported and dropped; the game session is never left
/// half-applied.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// The line is not a well-formed message.
    #[error("malformed message: {source}")]
    Malformed {
        /// The underlying decode error.
        #[from]
        source: serde_json::Error,
    },

    /// A move onto the final rank arrived without its promotion piece.
    #[error("move to the final rank requires a promotion piece")]
    MissingPromotion,

    /// The promotion field does not name a promotable piece kind.
    #[error("invalid promotion value {value}")]
    InvalidPromotion {
        /// The raw wire value.
        value: u8,
    },

    /// The engine rejected the decoded message.
    #[error(transparent)]
    Rejected(#[from] GameError),
}
