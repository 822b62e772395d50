//! Per-connection session handler.
//!
//! Each accepted connection gets one task running [`handle_connection`]:
//!
//!   1. spawn a writer task draining this player's outbox onto the socket
//!   2. loop: receive a frame → decode → dispatch to the registry
//!   3. on close or transport error: report the disconnect as a quit
//!
//! Everything the registry wants to say — to this player or their
//! opponent — goes through the outboxes, so the socket write order
//! always matches the event order the registry saw.

use std::sync::Arc;

use gridlock_protocol::{ClientCommand, Codec, ServerMessage};
use gridlock_transport::{Connection, WebSocketConnection};
use tokio::sync::mpsc;

use crate::ServerError;
use crate::server::ServerState;

pub(crate) async fn handle_connection(
    conn: WebSocketConnection,
    state: Arc<ServerState>,
) -> Result<(), ServerError> {
    let conn_id = conn.id();
    tracing::debug!(%conn_id, "session open");

    let (outbox, queued) = mpsc::unbounded_channel::<ServerMessage>();
    let conn = Arc::new(conn);
    let writer = spawn_writer(Arc::clone(&conn), state.codec, queued);

    loop {
        let text = match conn.recv().await {
            Ok(Some(text)) => text,
            Ok(None) => {
                tracing::debug!(%conn_id, "connection closed");
                break;
            }
            Err(e) => {
                tracing::debug!(%conn_id, error = %e, "receive failed");
                break;
            }
        };

        match state.codec.decode::<ClientCommand>(&text) {
            Ok(ClientCommand::Join { name }) => {
                state
                    .registry
                    .lock()
                    .await
                    .join(name, conn_id, outbox.clone());
            }
            Ok(ClientCommand::Move { row, column }) => {
                state
                    .registry
                    .lock()
                    .await
                    .dispatch_move(conn_id, row, column);
            }
            Err(e) => {
                // Malformed input gets an error response and nothing
                // else: the connection stays open and no game state is
                // touched.
                tracing::debug!(%conn_id, error = %e, "malformed message");
                let _ = outbox.send(ServerMessage::invalid_message());
            }
        }
    }

    state.registry.lock().await.dispatch_quit(conn_id);

    // Dropping our outbox clone lets the writer drain whatever the
    // teardown queued (nothing for us, but the opponent's handler is
    // doing the same dance) and exit once every sender is gone.
    drop(outbox);
    let _ = writer.await;

    Ok(())
}

/// Spawns the writer task: encodes queued messages and puts them on the
/// wire in order. Exits when the outbox closes or the socket dies.
fn spawn_writer(
    conn: Arc<WebSocketConnection>,
    codec: gridlock_protocol::JsonCodec,
    mut queued: mpsc::UnboundedReceiver<ServerMessage>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = queued.recv().await {
            let text = match codec.encode(&msg) {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!(error = %e, "failed to encode outbound message");
                    continue;
                }
            };
            if conn.send(&text).await.is_err() {
                break;
            }
        }
    })
}
