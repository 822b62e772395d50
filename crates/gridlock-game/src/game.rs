//! One match between two players: move application, outcome
//! computation, and the result messages both sides receive.

use std::fmt;

use gridlock_protocol::{ConnectionId, Outcome, ServerMessage};

use crate::{Board, Player};

/// Unique identifier for one in-progress game, allocated by the
/// registry from a monotonic counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameId(pub u64);

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "game-{}", self.0)
    }
}

/// The per-player outcome pair produced by one move attempt.
///
/// Computed by [`Game::make_move`] without sending anything, so the
/// registry can tear a finished game out of its maps *before* the
/// result messages go out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    acting: ConnectionId,
    acting_outcome: Outcome,
    other_outcome: Outcome,
}

impl MoveReport {
    /// The connection that made the move.
    pub fn acting(&self) -> ConnectionId {
        self.acting
    }

    /// Outcome delivered to the mover.
    pub fn acting_outcome(&self) -> Outcome {
        self.acting_outcome
    }

    /// Outcome delivered to the opponent.
    pub fn other_outcome(&self) -> Outcome {
        self.other_outcome
    }

    /// `true` when this move ended the game (win or draw).
    pub fn is_terminal(&self) -> bool {
        self.acting_outcome.is_terminal()
    }
}

/// A live match: two players and the board between them.
///
/// Exclusively owned by the registry from creation until teardown;
/// nothing here touches the registry's maps.
pub struct Game {
    id: GameId,
    player1: Player,
    player2: Player,
    board: Board,
}

impl Game {
    /// Creates a game over an empty board. `player1` moves first.
    pub fn new(id: GameId, player1: Player, player2: Player) -> Self {
        Self {
            id,
            player1,
            player2,
            board: Board::new(),
        }
    }

    pub fn id(&self) -> GameId {
        self.id
    }

    /// Both players' connection handles.
    pub fn connections(&self) -> [ConnectionId; 2] {
        [self.player1.conn(), self.player2.conn()]
    }

    /// Announces the match to both sides: names, the empty board, the
    /// recipient's mark, and the turn indicator (`true` for player 1).
    /// This is the only point at which turn order is communicated; the
    /// server does not re-check it per move.
    pub fn start(&self) {
        let game_state = self.board.grid();
        self.player1.send(ServerMessage::Start {
            player1_name: self.player1.name().to_string(),
            player2_name: self.player2.name().to_string(),
            game_state,
            turn: true,
            character: self.player1.mark(),
        });
        self.player2.send(ServerMessage::Start {
            player1_name: self.player1.name().to_string(),
            player2_name: self.player2.name().to_string(),
            game_state,
            turn: false,
            character: self.player2.mark(),
        });
    }

    /// Applies a move from `sender` and computes both outcomes.
    ///
    /// An unplaceable target (occupied cell, or coordinates outside the
    /// board — including negatives) flips the outcomes to
    /// `turn`/`wait`: the mover goes again, nothing changed. A placed
    /// mark is then checked for a win through its own cell, then for a
    /// draw; both are terminal.
    pub fn make_move(&mut self, sender: ConnectionId, row: i64, column: i64) -> MoveReport {
        let mark = self.resolve(sender).0.mark();

        let placed = match (to_index(row), to_index(column)) {
            (Some(r), Some(c)) => self.board.place(r, c, mark).then_some((r, c)),
            _ => None,
        };

        let (acting_outcome, other_outcome) = match placed {
            None => (Outcome::Turn, Outcome::Wait),
            Some((r, c)) if self.board.is_win(r, c, mark) => {
                (Outcome::Won, Outcome::Lost)
            }
            Some(_) if self.board.is_draw() => (Outcome::Draw, Outcome::Draw),
            Some(_) => (Outcome::Wait, Outcome::Turn),
        };

        tracing::debug!(
            id = %self.id,
            %sender,
            row,
            column,
            outcome = %acting_outcome,
            "move applied"
        );

        MoveReport {
            acting: sender,
            acting_outcome,
            other_outcome,
        }
    }

    /// Sends each player the current board and their own outcome.
    pub fn announce(&self, report: &MoveReport) {
        let game_state = self.board.grid();
        let (acting, other) = self.resolve(report.acting);
        acting.send(ServerMessage::Move {
            game_state,
            outcome: report.acting_outcome,
        });
        other.send(ServerMessage::Move {
            game_state,
            outcome: report.other_outcome,
        });
    }

    /// Tells the remaining player their opponent left, with the last
    /// known board.
    pub fn quit(&self, leaving: ConnectionId) {
        let (_, other) = self.resolve(leaving);
        other.send(ServerMessage::Move {
            game_state: self.board.grid(),
            outcome: Outcome::Left,
        });
    }

    /// Resolves `sender` to (acting, other) by connection identity.
    /// The registry's lookup guarantees the sender is one of the two.
    fn resolve(&self, sender: ConnectionId) -> (&Player, &Player) {
        if self.player1.conn() == sender {
            (&self.player1, &self.player2)
        } else {
            (&self.player2, &self.player1)
        }
    }
}

fn to_index(value: i64) -> Option<usize> {
    usize::try_from(value).ok()
}
