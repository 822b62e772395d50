//! Player identity: a name, a connection handle, and an assigned mark.

use gridlock_protocol::{ConnectionId, Mark, ServerMessage};
use tokio::sync::mpsc;

/// Channel end used to queue outbound messages for one connection.
///
/// The session handler owns the receiving half and drains it onto the
/// socket; game code only ever enqueues.
pub type Outbox = mpsc::UnboundedSender<ServerMessage>;

/// One side of a match. Immutable after creation.
///
/// The connection is referenced, not owned — `conn` is only used to
/// tell the two players of a game apart, and `outbox` only to address
/// messages.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    conn: ConnectionId,
    mark: Mark,
    outbox: Outbox,
}

impl Player {
    pub fn new(
        name: impl Into<String>,
        conn: ConnectionId,
        mark: Mark,
        outbox: Outbox,
    ) -> Self {
        Self {
            name: name.into(),
            conn,
            mark,
            outbox,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn conn(&self) -> ConnectionId {
        self.conn
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Queues a message for delivery. Fire-and-forget: a closed channel
    /// means the connection is already gone, and delivery failure is
    /// the transport's concern, not ours.
    pub fn send(&self, msg: ServerMessage) {
        let _ = self.outbox.send(msg);
    }
}
