//! taskwire Core
//!
//! Incremental decoder for the task event stream a build tool writes to
//! its output pipe. Each record is a decimal byte count on its own line
//! followed by exactly that many bytes of JSON describing one task
//! lifecycle event. Bytes arrive in arbitrary chunks; messages are
//! delivered as soon as their record is complete.
//!
//! # Architecture
//!
//! - **message.rs** - Message, MessageKind and payload types
//! - **accumulator.rs** - Unconsumed-byte buffer carried across chunks
//! - **frame.rs** - Header validation and record framing
//! - **decode.rs** - JSON body to Message
//! - **parser.rs** - Live/Failed state machine driving the delegate
//! - **error.rs** - Terminal failure kinds
//!
//! # Example
//!
//! ```
//! use taskwire_core::{Collector, MessageKind, Parser};
//!
//! let mut parser = Parser::new(Collector::new());
//! parser.append(b"31\n{\"kind\":\"finished\",\"name\":\"ld\"}");
//!
//! let messages = &parser.delegate().messages;
//! assert_eq!(messages[0].name, "ld");
//! assert!(matches!(messages[0].kind, MessageKind::Finished(_)));
//! ```

pub mod accumulator;
pub mod decode;
pub mod error;
pub mod frame;
pub mod message;
pub mod parser;

pub use accumulator::Accumulator;
pub use decode::{decode_message, DecodeError};
pub use error::ErrorKind;
pub use frame::{encode_record, Frame, Framer, HeaderError};
pub use message::{Completion, Launch, Message, MessageKind, OutputRef, Tag};
pub use parser::{Collector, Delegate, Parser};
