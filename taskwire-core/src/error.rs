//! Stream failure kinds.
//!
//! Every kind is terminal: once reported, the parser that reported it
//! never calls its delegate again.

use thiserror::Error;

/// Why a stream was judged corrupted.
///
/// Using an enum instead of a boxed error keeps the failure `Copy` and
/// lets collaborators match on it directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ErrorKind {
    /// Header line bytes are not valid UTF-8.
    #[error("invalid UTF8 bytes")]
    InvalidBytes,

    /// Header line is text but not a non-negative decimal integer.
    #[error("invalid message size")]
    InvalidSize,

    /// A framed body did not decode into a task message.
    #[error("unexpected JSON message")]
    UnexpectedMessage,
}
