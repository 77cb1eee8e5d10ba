//! The relay boundary: decoding peer messages and applying them to a game.
//!
//! Transport (sockets, rooms, timers) belongs to the layer above; this crate
//! only turns a line of JSON into a typed [`Message`] and pushes it through
//! the engine's own entry points, so remote moves obey exactly the same
//! legality rules as local ones.

pub mod apply;
pub mod error;
pub mod message;

pub use apply::{Applied, apply_message};
pub use error::RelayError;
pub use message::{Message, MinePosition, parse_message};
