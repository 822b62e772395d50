//! Core protocol types for gridlock's wire format.
//!
//! Every message that travels between a client and the server is one of
//! the structures in this module, serialized as a JSON object whose
//! `command` field names the message kind. The shapes are fixed — the
//! browser client parses these exact keys.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Board side length. The grid is always `BOARD_SIZE` × `BOARD_SIZE`.
pub const BOARD_SIZE: usize = 3;

/// The `error_message` sent for malformed or unrecognized payloads.
pub const INVALID_MESSAGE: &str = "Invalid Message";

/// The `error_message` reserved for operations on an unknown game.
///
/// Part of the protocol vocabulary; the server currently ignores stale
/// moves and quits instead of reporting them.
pub const GAME_NOT_FOUND: &str = "Game not found";

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// Opaque, stable identifier for one client connection.
///
/// Game state is keyed by this handle rather than by anything owned by
/// the network layer, so the matchmaking core can be driven and tested
/// without a real socket behind each player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnectionId(u64);

impl ConnectionId {
    /// Creates a `ConnectionId` from a raw `u64`.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the underlying `u64` value.
    pub fn into_inner(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "conn-{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Board vocabulary
// ---------------------------------------------------------------------------

/// One of the two symbols a player places on the board.
///
/// Player 1 is always `X`, player 2 always `O`. Serialized as the bare
/// string `"X"` / `"O"` (the `character` field of the `start` message).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => write!(f, "X"),
            Self::O => write!(f, "O"),
        }
    }
}

/// A single board cell: empty, or claimed by a mark.
///
/// The wire format uses `""` for an empty cell so the full grid is a
/// uniform array of strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    #[serde(rename = "")]
    Empty,
    X,
    O,
}

impl Cell {
    /// Returns `true` if no mark has been placed here.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => Self::X,
            Mark::O => Self::O,
        }
    }
}

/// The full board as it appears on the wire (`gameState`), row-major.
pub type Grid = [[Cell; BOARD_SIZE]; BOARD_SIZE];

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// Per-recipient status token carried by every `move` message.
///
/// `Turn`/`Wait` steer the normal back-and-forth (including the
/// "cell occupied, go again" case); the other four end the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Won,
    Lost,
    Left,
    Draw,
    Turn,
    Wait,
}

impl Outcome {
    /// Returns `true` for outcomes after which the game is destroyed.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Won | Self::Lost | Self::Left | Self::Draw)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Self::Won => "won",
            Self::Lost => "lost",
            Self::Left => "left",
            Self::Draw => "draw",
            Self::Turn => "turn",
            Self::Wait => "wait",
        };
        write!(f, "{token}")
    }
}

// ---------------------------------------------------------------------------
// Client → server
// ---------------------------------------------------------------------------

/// Commands a client can send.
///
/// `row`/`column` are deliberately signed: a coordinate like `-1` must
/// decode cleanly and then fail move validation (invalid move, outcome
/// `turn`) rather than bounce off the parser as a protocol error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "lowercase")]
pub enum ClientCommand {
    /// `{"command":"join","name":...}` — enter the matchmaking queue.
    Join { name: String },

    /// `{"command":"move","row":...,"column":...}` — claim a cell.
    Move { row: i64, column: i64 },
}

// ---------------------------------------------------------------------------
// Server → client
// ---------------------------------------------------------------------------

/// Messages the server sends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "lowercase")]
pub enum ServerMessage {
    /// Sent to both players when a match is formed. `turn` is `true`
    /// for player 1 (who moves first) and `false` for player 2;
    /// `character` is the recipient's own mark. This is the only time
    /// turn order is communicated.
    #[serde(rename_all = "camelCase")]
    Start {
        player1_name: String,
        player2_name: String,
        game_state: Grid,
        turn: bool,
        character: Mark,
    },

    /// Sent to both players after every move attempt (and to the
    /// survivor when an opponent leaves), carrying the full board and
    /// the recipient's own outcome.
    #[serde(rename_all = "camelCase")]
    Move { game_state: Grid, outcome: Outcome },

    /// Sent to a connection whose payload could not be understood.
    Error { error_message: String },
}

impl ServerMessage {
    /// The error response for malformed or unrecognized payloads.
    pub fn invalid_message() -> Self {
        Self::Error {
            error_message: INVALID_MESSAGE.to_string(),
        }
    }

    /// The error response for operations addressing no known game.
    pub fn game_not_found() -> Self {
        Self::Error {
            error_message: GAME_NOT_FOUND.to_string(),
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
