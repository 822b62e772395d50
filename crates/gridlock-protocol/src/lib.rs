//! Wire protocol for gridlock.
//!
//! Defines the "language" clients and the server speak:
//!
//! - **Types** ([`ClientCommand`], [`ServerMessage`], [`Outcome`], the
//!   board vocabulary) — the JSON structures on the wire.
//! - **Codec** ([`Codec`], [`JsonCodec`]) — how those structures become
//!   wire text and back.
//! - **Errors** ([`ProtocolError`]) — what can go wrong doing so.
//!
//! The protocol layer knows nothing about sockets or matchmaking; it
//! only describes messages.

mod codec;
mod error;
mod types;

pub use codec::{Codec, JsonCodec};
pub use error::ProtocolError;
pub use types::{
    BOARD_SIZE, Cell, ClientCommand, ConnectionId, GAME_NOT_FOUND, Grid,
    INVALID_MESSAGE, Mark, Outcome, ServerMessage,
};
