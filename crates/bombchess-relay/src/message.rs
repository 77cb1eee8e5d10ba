//! Wire message decoding.
//!
//! Peers exchange line-delimited JSON objects tagged by a `type` field. A
//! move carries board coordinates in the same row/col orientation the engine
//! uses, plus an optional integer promotion piece (Pawn = 1 .. King = 6).
//! The hosting peer announces the mine layout before the first move.

use serde::{Deserialize, Serialize};

use crate::error::RelayError;

/// A decoded peer message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Message {
    /// A move request: `{"type":"move","fromRow":6,"fromCol":4,...}`.
    #[serde(rename_all = "camelCase")]
    Move {
        from_row: i32,
        from_col: i32,
        to_row: i32,
        to_col: i32,
        /// Wire-encoded promotion piece, present only when the move promotes.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        promotion: Option<u8>,
    },
    /// The host's mine layout for this game.
    Mines { positions: Vec<MinePosition> },
    /// The sending peer resigns.
    Surrender,
}

/// One mined square in a layout announcement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinePosition {
    pub row: i32,
    pub col: i32,
}

/// Decode a single line of input into a [`Message`].
pub fn parse_message(line: &str) -> Result<Message, RelayError> {
    Ok(serde_json::from_str(line)?)
}
