//! # gridlock
//!
//! A two-player tic-tac-toe matchmaking server over WebSockets.
//!
//! Anonymous clients join a FIFO-of-one queue; each arrival is paired
//! with the waiting player, and the server relays moves between the
//! two while enforcing the rules authoritatively: cell occupancy,
//! win/draw detection, and teardown on completion or disconnect.
//!
//! See [`gridlock_protocol`] for the wire format and
//! [`gridlock_game`] for the matchmaking core.

mod error;
mod handler;
mod server;

pub use error::ServerError;
pub use server::{DEFAULT_ADDR, GameServer, GameServerBuilder};
