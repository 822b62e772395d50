//! Error types for the protocol layer.

/// Errors that can occur while encoding or decoding wire messages.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// Serialization of an outbound message failed.
    #[error("encode failed: {0}")]
    Encode(serde_json::Error),

    /// An inbound payload was malformed: not JSON, wrong shape, or a
    /// missing/unrecognized `command` field.
    #[error("decode failed: {0}")]
    Decode(serde_json::Error),
}
