//! `GameServer` builder and accept loop.
//!
//! Ties the layers together: transport → protocol → matchmaking core.

use std::sync::Arc;

use gridlock_game::MatchRegistry;
use gridlock_protocol::JsonCodec;
use gridlock_transport::{Transport, WebSocketTransport};
use tokio::sync::Mutex;

use crate::ServerError;
use crate::handler::handle_connection;

/// Default listen address.
pub const DEFAULT_ADDR: &str = "0.0.0.0:8888";

/// Shared server state handed to every connection task.
///
/// The registry sits behind a single async mutex: each inbound event
/// (join / move / disconnect) is processed to completion under the
/// lock, including queuing all outgoing sends, so no two events ever
/// interleave partial updates to a game. Actual socket writes happen
/// outside the lock, in the per-connection writer tasks.
pub(crate) struct ServerState {
    pub(crate) registry: Mutex<MatchRegistry>,
    pub(crate) codec: JsonCodec,
}

/// Builder for configuring and starting a [`GameServer`].
///
/// # Example
///
/// ```rust,no_run
/// use gridlock::GameServer;
///
/// # async fn run() -> Result<(), gridlock::ServerError> {
/// let server = GameServer::builder().bind("0.0.0.0:8888").build().await?;
/// server.run().await
/// # }
/// ```
pub struct GameServerBuilder {
    bind_addr: String,
}

impl GameServerBuilder {
    /// Creates a builder with the default listen address.
    pub fn new() -> Self {
        Self {
            bind_addr: DEFAULT_ADDR.to_string(),
        }
    }

    /// Sets the address to bind to.
    pub fn bind(mut self, addr: &str) -> Self {
        self.bind_addr = addr.to_string();
        self
    }

    /// Binds the transport and assembles the server.
    pub async fn build(self) -> Result<GameServer, ServerError> {
        let transport = WebSocketTransport::bind(&self.bind_addr).await?;
        let state = Arc::new(ServerState {
            registry: Mutex::new(MatchRegistry::new()),
            codec: JsonCodec,
        });
        Ok(GameServer { transport, state })
    }
}

impl Default for GameServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A running gridlock server.
pub struct GameServer {
    transport: WebSocketTransport,
    state: Arc<ServerState>,
}

impl GameServer {
    /// Creates a new builder.
    pub fn builder() -> GameServerBuilder {
        GameServerBuilder::new()
    }

    /// The local address the server is bound to.
    pub fn local_addr(&self) -> std::io::Result<std::net::SocketAddr> {
        self.transport.local_addr()
    }

    /// Runs the accept loop, spawning one session task per connection.
    ///
    /// Runs until the process is terminated. A failed accept is logged
    /// and never takes down connections already in flight.
    pub async fn run(mut self) -> Result<(), ServerError> {
        tracing::info!("gridlock server running");

        loop {
            match self.transport.accept().await {
                Ok(conn) => {
                    let state = Arc::clone(&self.state);
                    tokio::spawn(async move {
                        if let Err(e) = handle_connection(conn, state).await {
                            tracing::debug!(error = %e, "session ended with error");
                        }
                    });
                }
                Err(e) => {
                    tracing::error!(error = %e, "accept failed");
                }
            }
        }
    }
}
