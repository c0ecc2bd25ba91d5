//! Cross-chunk byte buffering.
//!
//! The accumulator holds every input byte that has not yet been consumed
//! into a header or a body. Consumption only moves a read offset forward;
//! the dead prefix is compacted away on the next append, so a burst of
//! small records from one chunk costs no shifting per record.

/// Unconsumed tail of the input stream.
#[derive(Debug, Default)]
pub struct Accumulator {
    data: Vec<u8>,
    /// Start of the unconsumed bytes within `data`
    head: usize,
}

impl Accumulator {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            head: 0,
        }
    }

    /// Append a chunk. No parsing happens here.
    pub fn append(&mut self, chunk: &[u8]) {
        if self.head > 0 {
            self.data.drain(..self.head);
            self.head = 0;
        }
        self.data.extend_from_slice(chunk);
    }

    /// Unconsumed bytes.
    #[inline]
    pub fn peek(&self) -> &[u8] {
        &self.data[self.head..]
    }

    /// Drop `n` leading bytes.
    ///
    /// Callers only consume what they have already looked at through
    /// [`peek`](Self::peek); `n` is clamped to what is held.
    #[inline]
    pub fn consume(&mut self, n: usize) {
        self.head = (self.head + n).min(self.data.len());
        if self.head == self.data.len() {
            self.data.clear();
            self.head = 0;
        }
    }

    /// Number of unconsumed bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len() - self.head
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
