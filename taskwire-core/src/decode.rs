//! Body decoding: one framed JSON body into one [`Message`].
//!
//! Tolerant reader: unknown fields are ignored at every level. The
//! `kind` tag, however, must be one of the closed set in [`Tag`].

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::error::ErrorKind;
use crate::message::{Completion, Launch, Message, MessageKind, Tag};

/// Why a body failed to decode.
///
/// The variants exist for diagnostics only; every one of them surfaces
/// as [`ErrorKind::UnexpectedMessage`].
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Syntax error, wrong value type or missing required field.
    #[error("malformed task message: {0}")]
    Json(#[from] serde_json::Error),

    #[error("task message is not a JSON object")]
    NotAnObject,

    #[error("unknown task message kind {0:?}")]
    UnknownKind(String),
}

impl From<DecodeError> for ErrorKind {
    fn from(_: DecodeError) -> Self {
        ErrorKind::UnexpectedMessage
    }
}

/// Fields shared by every message.
#[derive(Deserialize)]
struct Envelope {
    name: String,
    kind: String,
}

/// Decode exactly one record body.
pub fn decode_message(body: &[u8]) -> Result<Message, DecodeError> {
    let value: Value = serde_json::from_slice(body)?;
    if !value.is_object() {
        return Err(DecodeError::NotAnObject);
    }

    let Envelope { name, kind } = Envelope::deserialize(&value)?;
    let Some(tag) = Tag::from_wire(&kind) else {
        return Err(DecodeError::UnknownKind(kind));
    };

    let kind = match tag {
        Tag::Began => MessageKind::Began(Launch::deserialize(&value)?),
        Tag::Skipped => MessageKind::Skipped(Launch::deserialize(&value)?),
        Tag::Finished => MessageKind::Finished(Completion::deserialize(&value)?),
        Tag::Signalled => MessageKind::Signalled(Completion::deserialize(&value)?),
    };

    Ok(Message { name, kind })
}
