//! Core chess engine: board state, move legality, game tracking, move
//! recording, and the mine variant.
//!
//! The engine is headless and synchronous. A [`Game`] owns one session's
//! entire state; the UI or network-relay layer drives it through
//! [`Game::move_piece`] and [`Game::promote_pawn`] and reads state back
//! through the query methods. Moves arriving from a remote peer go through
//! the same entry points as local input, preserving one linear move
//! sequence.

mod board;
mod color;
mod error;
mod game;
mod mines;
mod movegen;
mod notation;
mod piece;
mod piece_kind;
mod record;
mod square;

pub use board::{Board, PrettyBoard};
pub use color::Color;
pub use error::GameError;
pub use game::Game;
pub use mines::{DEFAULT_MINE_COUNT, MineField};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use record::{GameResult, MoveRecord};
pub use square::Square;
