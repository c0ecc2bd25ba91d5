//! Task lifecycle messages - the decoded output of the taskwire parser.
//!
//! One `Message` is produced per framed record. The set of lifecycle
//! events is closed: a record whose `kind` is not one of the four wire
//! tags below never becomes a `Message`.
//!
//! | wire `kind`  | variant                      | payload     |
//! |--------------|------------------------------|-------------|
//! | `began`      | [`MessageKind::Began`]       | [`Launch`]  |
//! | `skipped`    | [`MessageKind::Skipped`]     | [`Launch`]  |
//! | `finished`   | [`MessageKind::Finished`]    | [`Completion`] |
//! | `signalled`  | [`MessageKind::Signalled`]   | [`Completion`] |
//!
//! These types are stable and hand-written.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single lifecycle event for a named task.
///
/// The same task `name` usually shows up more than once over a stream,
/// e.g. `began` followed by `finished`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    /// Task identifier (compile step, link step, ...).
    pub name: String,
    #[serde(flatten)]
    pub kind: MessageKind,
}

impl Message {
    pub fn new(name: impl Into<String>, kind: MessageKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// The wire tag of this message.
    #[inline]
    pub fn tag(&self) -> Tag {
        self.kind.tag()
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind.tag(), self.name)
    }
}

/// Lifecycle event payload, one variant per wire tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MessageKind {
    /// Task started.
    Began(Launch),
    /// Task was up to date and did not run.
    Skipped(Launch),
    /// Task ran to completion (successfully or not).
    Finished(Completion),
    /// Task was terminated by a signal.
    Signalled(Completion),
}

impl MessageKind {
    pub fn tag(&self) -> Tag {
        match self {
            Self::Began(_) => Tag::Began,
            Self::Skipped(_) => Tag::Skipped,
            Self::Finished(_) => Tag::Finished,
            Self::Signalled(_) => Tag::Signalled,
        }
    }

    /// Inputs and outputs, for `began` and `skipped`.
    pub fn as_launch(&self) -> Option<&Launch> {
        match self {
            Self::Began(launch) | Self::Skipped(launch) => Some(launch),
            _ => None,
        }
    }

    /// Captured output, for `finished` and `signalled`.
    pub fn as_completion(&self) -> Option<&Completion> {
        match self {
            Self::Finished(completion) | Self::Signalled(completion) => Some(completion),
            _ => None,
        }
    }
}

/// Payload of `began` and `skipped`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Launch {
    /// Input files, in wire order.
    pub inputs: Vec<String>,
    /// Produced artifacts, in wire order.
    pub outputs: Vec<OutputRef>,
}

/// Payload of `finished` and `signalled`.
///
/// Only a field literally named `output` populates this. Sibling fields
/// such as `exit-status`, `signal` or `error-message` are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

impl Completion {
    pub fn with_output(output: impl Into<String>) -> Self {
        Self {
            output: Some(output.into()),
        }
    }
}

/// An artifact produced by a task. Neither field is interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutputRef {
    /// Artifact classification, e.g. `object` or `image`.
    #[serde(rename = "type")]
    pub r#type: String,
    pub path: String,
}

impl OutputRef {
    pub fn new(r#type: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            r#type: r#type.into(),
            path: path.into(),
        }
    }
}

/// Discriminator of a [`MessageKind`], as spelled on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Began,
    Skipped,
    Finished,
    Signalled,
}

static WIRE_TAGS: phf::Map<&'static str, Tag> = phf::phf_map! {
    "began" => Tag::Began,
    "skipped" => Tag::Skipped,
    "finished" => Tag::Finished,
    "signalled" => Tag::Signalled,
};

impl Tag {
    /// Look up a wire `kind` string. Matching is exact and case-sensitive.
    #[inline]
    pub fn from_wire(kind: &str) -> Option<Tag> {
        WIRE_TAGS.get(kind).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Began => "began",
            Tag::Skipped => "skipped",
            Tag::Finished => "finished",
            Tag::Signalled => "signalled",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
