//! Test infrastructure for the taskwire parser
//!
//! Provides wire fixtures, delivery helpers and seeded chunk splitting.

#![allow(dead_code)]

mod fixtures;
mod generators;

pub use fixtures::{began, finished, record, session, signalled, skipped};
pub use generators::Gen;

use taskwire_core::{Collector, Parser};

/// Feed each chunk in order and return what the delegate saw.
pub fn feed<'a, I>(chunks: I) -> Collector
where
    I: IntoIterator<Item = &'a [u8]>,
{
    let mut parser = Parser::new(Collector::new());
    for chunk in chunks {
        parser.append(chunk);
    }
    parser.into_delegate()
}

/// Feed the whole input as one chunk.
pub fn feed_whole(input: &[u8]) -> Collector {
    feed([input])
}
