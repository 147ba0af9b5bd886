//! JSON wire codec for [`Message`].

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use super::types::Message;

/// Field carrying the variant name on the wire.
pub const DISCRIMINATOR: &str = "@type";

/// A payload that does not describe any known message.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Malformed JSON, unknown `@type`, or a missing or mistyped field.
    #[error("Failed to decode message: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to decode message: payload is not a JSON object")]
    NotAnObject,

    #[error("Failed to decode message: missing string \"@type\" field")]
    MissingDiscriminator,
}

#[derive(Debug, Error)]
#[error("Failed to encode message: {0}")]
pub struct EncodeError(#[from] serde_json::Error);

impl Message {
    /// Serialize to the UTF-8 JSON wire payload.
    pub fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Rebuild a message from a wire payload.
    ///
    /// Only a JSON object with a string `@type` is accepted; serde would
    /// otherwise also take the positional array form of a tagged enum.
    pub fn decode(payload: &[u8]) -> Result<Message, DecodeError> {
        let value: Value = serde_json::from_slice(payload)?;
        let object = value.as_object().ok_or(DecodeError::NotAnObject)?;
        if !object.get(DISCRIMINATOR).is_some_and(Value::is_string) {
            return Err(DecodeError::MissingDiscriminator);
        }
        Ok(Message::deserialize(value)?)
    }
}
