//! Unified error type for the server crate.

use gridlock_protocol::ProtocolError;
use gridlock_transport::TransportError;

/// Top-level error wrapping the layer-specific errors.
///
/// `#[from]` gives the `?` operator automatic conversion from each
/// layer's error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// A transport-level error (bind, accept, send, recv).
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A protocol-level error (encode, decode).
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}
