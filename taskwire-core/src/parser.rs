//! Chunk-fed parser with delegate-based delivery.
//!
//! ```text
//! chunk ──append──▶ Framer ──body──▶ decode_message ──▶ Delegate::on_message
//!                     │                    │
//!                     └──HeaderError───────┴─DecodeError──▶ Delegate::on_failure (once)
//! ```
//!
//! The parser has two states. While live, every `append` frames and
//! decodes as many records as the held bytes allow and delivers them in
//! stream order before returning. The first failure is reported once,
//! all buffered bytes are dropped and the parser goes inert: later input
//! is accepted and ignored.

use std::io::{self, Read};

use tracing::{debug, trace};

use crate::decode::decode_message;
use crate::error::ErrorKind;
use crate::frame::{Frame, Framer};
use crate::message::Message;

/// Initial accumulator capacity used by [`Parser::new`].
pub const DEFAULT_CAPACITY: usize = 4 * 1024;

/// Chunk size used by [`Parser::read_from`].
const READ_CHUNK: usize = 8 * 1024;

/// Receiver of parser output.
///
/// Both methods are called synchronously from inside
/// [`Parser::append`]. `on_failure` is called at most once per parser, and
/// nothing is called after it.
pub trait Delegate {
    fn on_message(&mut self, message: Message);

    fn on_failure(&mut self, error: ErrorKind);
}

impl<D: Delegate + ?Sized> Delegate for &mut D {
    fn on_message(&mut self, message: Message) {
        (**self).on_message(message)
    }

    fn on_failure(&mut self, error: ErrorKind) {
        (**self).on_failure(error)
    }
}

/// Delegate that keeps everything it is given.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Collector {
    pub messages: Vec<Message>,
    pub failure: Option<ErrorKind>,
}

impl Collector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the collected messages, leaving the failure in place.
    pub fn take_messages(&mut self) -> Vec<Message> {
        std::mem::take(&mut self.messages)
    }
}

impl Delegate for Collector {
    fn on_message(&mut self, message: Message) {
        self.messages.push(message);
    }

    fn on_failure(&mut self, error: ErrorKind) {
        self.failure = Some(error);
    }
}

#[derive(Debug)]
enum State {
    Live(Framer),
    Failed,
}

/// Incremental decoder for one task event stream.
///
/// One parser per stream. Independent streams use independent parsers.
#[derive(Debug)]
pub struct Parser<D> {
    state: State,
    delegate: D,
}

impl<D: Delegate> Parser<D> {
    pub fn new(delegate: D) -> Self {
        Self::with_capacity(delegate, DEFAULT_CAPACITY)
    }

    pub fn with_capacity(delegate: D, capacity: usize) -> Self {
        Self {
            state: State::Live(Framer::with_capacity(capacity)),
            delegate,
        }
    }

    /// Feed the next chunk of the stream.
    ///
    /// Chunk boundaries are arbitrary; an empty chunk is fine. All
    /// callbacks this chunk triggers happen before this returns.
    pub fn append(&mut self, chunk: &[u8]) {
        let State::Live(framer) = &mut self.state else {
            trace!(len = chunk.len(), "discarding input after failure");
            return;
        };

        framer.append(chunk);
        if let Err(error) = drain(framer, &mut self.delegate) {
            self.state = State::Failed;
            self.delegate.on_failure(error);
        }
    }

    /// Pump a reader to EOF, appending each read as a chunk.
    ///
    /// Returns the number of bytes read. Read errors are returned as-is
    /// and leave the parser where the last successful chunk left it.
    pub fn read_from<R: Read>(&mut self, mut reader: R) -> io::Result<u64> {
        let mut buf = vec![0u8; READ_CHUNK];
        let mut total = 0u64;
        loop {
            let n = match reader.read(&mut buf) {
                Ok(0) => return Ok(total),
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            total += n as u64;
            self.append(&buf[..n]);
        }
    }

    /// Whether the stream has been judged corrupted.
    #[inline]
    pub fn is_failed(&self) -> bool {
        matches!(self.state, State::Failed)
    }

    /// Bytes received but not yet delivered as a message.
    pub fn buffered_len(&self) -> usize {
        match &self.state {
            State::Live(framer) => framer.buffered_len(),
            State::Failed => 0,
        }
    }

    pub fn delegate(&self) -> &D {
        &self.delegate
    }

    pub fn delegate_mut(&mut self) -> &mut D {
        &mut self.delegate
    }

    pub fn into_delegate(self) -> D {
        self.delegate
    }
}

/// Frame and deliver until more bytes are needed or the stream breaks.
fn drain<D: Delegate>(framer: &mut Framer, delegate: &mut D) -> Result<(), ErrorKind> {
    loop {
        let body = match framer.next_frame() {
            Ok(Frame::Record(body)) => body,
            Ok(Frame::NeedMoreData) => return Ok(()),
            Err(err) => {
                debug!(error = %err, "malformed record header");
                return Err(err.into());
            }
        };
        trace!(len = body.len(), "framed record");

        match decode_message(body) {
            Ok(message) => {
                trace!(name = %message.name, kind = %message.tag(), "task message");
                delegate.on_message(message);
            }
            Err(err) => {
                debug!(error = %err, "undecodable record body");
                return Err(err.into());
            }
        }
    }
}
