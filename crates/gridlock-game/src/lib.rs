//! Matchmaking and game-state core for gridlock.
//!
//! This crate is the authoritative heart of the server: it pairs
//! waiting players, owns every live game, validates and applies moves,
//! and tears games down on completion or disconnect. It performs no
//! network I/O — outbound messages are queued on per-player channels
//! ([`Outbox`]) that the transport layer drains.
//!
//! # Key types
//!
//! - [`Board`] — pure grid logic with win/draw detection
//! - [`Player`] — name, connection handle, assigned mark
//! - [`Game`] — two players and a board; applies moves, emits results
//! - [`MatchRegistry`] — the waiting slot and all live games

mod board;
mod game;
mod player;
mod registry;

pub use board::Board;
pub use game::{Game, GameId, MoveReport};
pub use player::{Outbox, Player};
pub use registry::MatchRegistry;
