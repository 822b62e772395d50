//! Codec trait and the JSON implementation.
//!
//! The session handler talks to the codec, not to `serde_json` directly:
//! decode failure is an ordinary `Result` the dispatcher inspects (and
//! answers with an `error` payload), never control flow by panic or
//! exception.

use serde::{Serialize, de::DeserializeOwned};

use crate::ProtocolError;

/// Converts between protocol types and wire text.
///
/// `Send + Sync + 'static` because a codec is shared across every
/// connection task for the life of the server.
pub trait Codec: Send + Sync + 'static {
    /// Serializes a value to its wire representation.
    ///
    /// # Errors
    /// Returns [`ProtocolError::Encode`] if serialization fails.
    fn encode<T: Serialize>(&self, value: &T) -> Result<String, ProtocolError>;

    /// Parses wire text into a value.
    ///
    /// # Errors
    /// Returns [`ProtocolError::Decode`] when the text is not valid
    /// JSON or does not match the expected shape — including a missing
    /// or unrecognized `command` field.
    fn decode<T: DeserializeOwned>(&self, text: &str) -> Result<T, ProtocolError>;
}

/// A [`Codec`] speaking the JSON wire format described in [`crate::types`].
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn encode<T: Serialize>(&self, value: &T) -> Result<String, ProtocolError> {
        serde_json::to_string(value).map_err(ProtocolError::Encode)
    }

    fn decode<T: DeserializeOwned>(&self, text: &str) -> Result<T, ProtocolError> {
        serde_json::from_str(text).map_err(ProtocolError::Decode)
    }
}
