//! Record framing.
//!
//! # Wire format
//!
//! ```text
//! +-------------------+------+-----------------------+
//! | decimal length N  | '\n' | N bytes of JSON       |
//! +-------------------+------+-----------------------+
//! ```
//!
//! Empty lines may appear before any header; they are separators and are
//! skipped. `N` counts the JSON bytes only.
//!
//! The framer works in two steps. A header is validated and consumed as
//! soon as its `\n` arrives; the body is then awaited separately, so a
//! header is never re-validated while its body trickles in.

use std::str::Utf8Error;

use memchr::memchr;
use thiserror::Error;

use crate::accumulator::Accumulator;
use crate::error::ErrorKind;
use crate::message::Message;

/// Outcome of one framing attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame<'b> {
    /// One complete body. Valid until the next call into the framer.
    Record(&'b [u8]),
    /// Nothing more can be framed from the bytes held so far.
    NeedMoreData,
}

/// A malformed header line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderError {
    #[error("header is not valid UTF-8: {0}")]
    InvalidBytes(#[source] Utf8Error),

    #[error("header {0:?} is not a decimal length")]
    InvalidSize(String),
}

impl From<HeaderError> for ErrorKind {
    fn from(err: HeaderError) -> Self {
        match err {
            HeaderError::InvalidBytes(_) => ErrorKind::InvalidBytes,
            HeaderError::InvalidSize(_) => ErrorKind::InvalidSize,
        }
    }
}

/// Carves records out of an [`Accumulator`].
#[derive(Debug, Default)]
pub struct Framer {
    buffer: Accumulator,
    /// Length from a consumed header whose body is still incomplete
    pending: Option<usize>,
    /// Length of the body handed out by the previous call, consumed lazily
    lent: usize,
    /// Leading bytes of an unterminated header line already searched for `\n`
    scanned: usize,
}

impl Framer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Accumulator::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Buffer a chunk for framing.
    pub fn append(&mut self, chunk: &[u8]) {
        self.settle();
        self.buffer.append(chunk);
    }

    /// Bytes held but not yet framed (including a partial body).
    pub fn buffered_len(&self) -> usize {
        self.buffer.len() - self.lent
    }

    /// Try to frame the next record.
    ///
    /// Calling again without appending after `NeedMoreData` returns
    /// `NeedMoreData` again.
    pub fn next_frame(&mut self) -> Result<Frame<'_>, HeaderError> {
        self.settle();

        let len = match self.pending {
            Some(len) => len,
            None => match self.read_header()? {
                Some(len) => len,
                None => return Ok(Frame::NeedMoreData),
            },
        };

        if self.buffer.len() < len {
            self.pending = Some(len);
            return Ok(Frame::NeedMoreData);
        }

        self.pending = None;
        self.lent = len;
        Ok(Frame::Record(&self.buffer.peek()[..len]))
    }

    /// Consume the body handed out by the previous `next_frame`.
    fn settle(&mut self) {
        if self.lent > 0 {
            self.buffer.consume(self.lent);
            self.lent = 0;
        }
    }

    /// Skip separator lines, then validate and consume one header line.
    fn read_header(&mut self) -> Result<Option<usize>, HeaderError> {
        loop {
            let held = self.buffer.peek();
            let Some(newline) = memchr(b'\n', &held[self.scanned..]) else {
                self.scanned = held.len();
                return Ok(None);
            };
            let newline = self.scanned + newline;
            self.scanned = 0;
            if newline == 0 {
                self.buffer.consume(1);
                continue;
            }
            let len = parse_length(&self.buffer.peek()[..newline])?;
            self.buffer.consume(newline + 1);
            return Ok(Some(len));
        }
    }
}

/// Parse a header line (without its `\n`) into a body length.
///
/// Only ASCII digits are accepted: no sign (not even `+`), no padding,
/// no `\r`.
pub fn parse_length(line: &[u8]) -> Result<usize, HeaderError> {
    let text = std::str::from_utf8(line).map_err(HeaderError::InvalidBytes)?;
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(HeaderError::InvalidSize(text.to_owned()));
    }
    text.parse::<usize>()
        .map_err(|_| HeaderError::InvalidSize(text.to_owned()))
}

/// Encode one message as a wire record: `<len>\n<json>`.
pub fn encode_record(message: &Message) -> Result<Vec<u8>, serde_json::Error> {
    let body = serde_json::to_vec(message)?;
    let mut record = Vec::with_capacity(body.len() + 8);
    record.extend_from_slice(body.len().to_string().as_bytes());
    record.push(b'\n');
    record.extend_from_slice(&body);
    Ok(record)
}
