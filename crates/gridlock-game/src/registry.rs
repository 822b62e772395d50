//! The match registry: the single waiting slot, the set of live games,
//! and the connection → game index.

use std::collections::HashMap;

use gridlock_protocol::{ConnectionId, Mark};

use crate::{Game, GameId, Outbox, Player};

/// Process-wide matchmaking state.
///
/// Owned by the server entry point and driven one event at a time
/// (join / move / quit); each event runs to completion — including
/// queuing every outgoing send — before the next is processed.
///
/// Invariants:
/// - a connection appears in `by_connection` iff the game it points to
///   lists that connection as one of its two players, and vice versa;
/// - the waiting slot holds at most one player, and never a connection
///   that is also in a game;
/// - game ids strictly increase and are never reused.
#[derive(Default)]
pub struct MatchRegistry {
    waiting: Option<Player>,
    games: HashMap<GameId, Game>,
    by_connection: HashMap<ConnectionId, GameId>,
    next_id: u64,
}

impl MatchRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enters a player into matchmaking.
    ///
    /// With no one waiting, the player is parked in the waiting slot as
    /// player 1 (mark `X`) and nothing is sent — the client infers the
    /// wait from the absence of a `start`. With a waiter present, the
    /// pair is matched: the waiter becomes player 1, the newcomer
    /// player 2 (mark `O`), both connections are indexed, and the game
    /// announces itself to both sides.
    ///
    /// A join from a connection that is already waiting or already in a
    /// game is ignored; honoring it would break the
    /// one-game-per-connection invariant.
    pub fn join(&mut self, name: impl Into<String>, conn: ConnectionId, outbox: Outbox) {
        if self.by_connection.contains_key(&conn)
            || self.waiting.as_ref().is_some_and(|p| p.conn() == conn)
        {
            tracing::debug!(%conn, "duplicate join ignored");
            return;
        }

        match self.waiting.take() {
            None => {
                tracing::info!(%conn, "player queued, waiting for an opponent");
                self.waiting = Some(Player::new(name, conn, Mark::X, outbox));
            }
            Some(player1) => {
                let player2 = Player::new(name, conn, Mark::O, outbox);
                let id = self.allocate_id();
                self.by_connection.insert(player1.conn(), id);
                self.by_connection.insert(player2.conn(), id);
                tracing::info!(
                    %id,
                    player1 = %player1.conn(),
                    player2 = %player2.conn(),
                    "match paired"
                );
                let game = Game::new(id, player1, player2);
                game.start();
                self.games.insert(id, game);
            }
        }
    }

    /// Routes a move from `conn` to its game.
    ///
    /// A connection with no game is silently ignored — a move racing a
    /// finished game's teardown is expected traffic, not an error. When
    /// the move is terminal the game is removed from both maps before
    /// any result message is sent, so no further event can reach it.
    pub fn dispatch_move(&mut self, conn: ConnectionId, row: i64, column: i64) {
        let Some(&id) = self.by_connection.get(&conn) else {
            tracing::debug!(%conn, "move from connection with no game, ignoring");
            return;
        };
        let Some(game) = self.games.get_mut(&id) else {
            return;
        };

        let report = game.make_move(conn, row, column);
        if report.is_terminal() {
            if let Some(game) = self.remove_game(id) {
                tracing::info!(%id, outcome = %report.acting_outcome(), "game over");
                game.announce(&report);
            }
        } else if let Some(game) = self.games.get(&id) {
            game.announce(&report);
        }
    }

    /// Handles a disconnect.
    ///
    /// A waiting player that was never matched just vacates the slot.
    /// A playing connection tears its game down: removal from both maps
    /// first, then the `left` notification to the opponent. Unknown
    /// connections are a no-op.
    pub fn dispatch_quit(&mut self, conn: ConnectionId) {
        if self.waiting.as_ref().is_some_and(|p| p.conn() == conn) {
            tracing::info!(%conn, "waiting player left the queue");
            self.waiting = None;
            return;
        }

        let Some(&id) = self.by_connection.get(&conn) else {
            return;
        };
        if let Some(game) = self.remove_game(id) {
            tracing::info!(%id, %conn, "player left mid-game");
            game.quit(conn);
        }
    }

    /// The connection currently parked in the waiting slot, if any.
    pub fn waiting_player(&self) -> Option<ConnectionId> {
        self.waiting.as_ref().map(Player::conn)
    }

    /// The game a connection is playing in, if any.
    pub fn game_of(&self, conn: ConnectionId) -> Option<GameId> {
        self.by_connection.get(&conn).copied()
    }

    /// Number of live games.
    pub fn game_count(&self) -> usize {
        self.games.len()
    }

    /// Removes a game from both indexes and returns it, if present.
    ///
    /// Idempotent: entries already gone (a win teardown racing a quit)
    /// are tolerated, and any index entries left pointing at a removed
    /// id are swept out.
    fn remove_game(&mut self, id: GameId) -> Option<Game> {
        let game = self.games.remove(&id);
        match &game {
            Some(game) => {
                for conn in game.connections() {
                    self.by_connection.remove(&conn);
                }
            }
            None => {
                self.by_connection.retain(|_, g| *g != id);
            }
        }
        game
    }

    fn allocate_id(&mut self) -> GameId {
        let id = GameId(self.next_id);
        self.next_id += 1;
        id
    }
}
