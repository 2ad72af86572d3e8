//! Message envelope definitions.
//!
//! This module defines the typed message shape exchanged between nodes of
//! the key-value protocol: a request kind, routing identifiers, and an
//! advisory leader hint.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{DecodeError, InvalidArgument};

/// Leader hint value meaning "no known leader".
///
/// Protocol convention inherited from the replication layer: a node that
/// does not know the current leader names it as `FFFF`.
pub const UNKNOWN_LEADER: &str = "FFFF";

/// Message kind.
///
/// The protocol vocabulary is closed. Any other tag on the wire is
/// rejected at decode time, never mapped to a default.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    /// Read the value for a key.
    Get,
    /// Write the value for a key.
    Put,
}

impl MessageKind {
    /// The wire tag for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Get => "get",
            MessageKind::Put => "put",
        }
    }

    pub(crate) fn from_wire_tag(tag: &str) -> Option<MessageKind> {
        match tag {
            "get" => Some(MessageKind::Get),
            "put" => Some(MessageKind::Put),
            _ => None,
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageKind {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MessageKind::from_wire_tag(s).ok_or_else(|| DecodeError::UnknownKind(s.to_string()))
    }
}

/// The message envelope exchanged between nodes.
///
/// Immutable once constructed. The constructors enforce that `source` and
/// `destination` are non-empty and that an unknown leader is represented
/// only by [`UNKNOWN_LEADER`], so every `Envelope` a caller can hold is
/// valid to encode.
///
/// ## Example Usage
/// ```rust
/// use kvwire::{Envelope, MessageKind, UNKNOWN_LEADER};
///
/// let envelope = Envelope::new(MessageKind::Get, "N1", "N2").unwrap();
///
/// assert_eq!(envelope.leader_hint(), UNKNOWN_LEADER);
/// ```
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    #[serde(rename = "type")]
    kind: MessageKind,
    #[serde(rename = "src")]
    source: String,
    #[serde(rename = "dest")]
    destination: String,
    #[serde(rename = "leader")]
    leader_hint: String,
}

impl Envelope {
    /// Create an envelope with no known leader.
    pub fn new(
        kind: MessageKind,
        source: impl Into<String>,
        destination: impl Into<String>,
    ) -> Result<Envelope, InvalidArgument> {
        Envelope::with_leader(kind, source, destination, UNKNOWN_LEADER)
    }

    /// Create an envelope carrying a leader hint.
    ///
    /// Pass [`UNKNOWN_LEADER`] to state explicitly that no leader is
    /// known; an empty hint is an error, not an unknown leader.
    pub fn with_leader(
        kind: MessageKind,
        source: impl Into<String>,
        destination: impl Into<String>,
        leader_hint: impl Into<String>,
    ) -> Result<Envelope, InvalidArgument> {
        let source = source.into();
        let destination = destination.into();
        let leader_hint = leader_hint.into();
        if source.is_empty() {
            return Err(InvalidArgument { field: "source" });
        }
        if destination.is_empty() {
            return Err(InvalidArgument { field: "destination" });
        }
        if leader_hint.is_empty() {
            return Err(InvalidArgument { field: "leader_hint" });
        }
        Ok(Envelope {
            kind,
            source,
            destination,
            leader_hint,
        })
    }

    /// Build from parts the codec has already validated.
    pub(crate) fn from_wire_parts(
        kind: MessageKind,
        source: String,
        destination: String,
        leader_hint: String,
    ) -> Envelope {
        debug_assert!(!source.is_empty() && !destination.is_empty() && !leader_hint.is_empty());
        Envelope {
            kind,
            source,
            destination,
            leader_hint,
        }
    }

    /// The message kind.
    pub fn kind(&self) -> MessageKind {
        self.kind
    }

    /// The sending node.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The receiving node.
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// The advisory leader hint, [`UNKNOWN_LEADER`] when none is known.
    pub fn leader_hint(&self) -> &str {
        &self.leader_hint
    }

    /// Whether the envelope names a concrete leader.
    pub fn has_known_leader(&self) -> bool {
        self.leader_hint != UNKNOWN_LEADER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_defaults_to_unknown_leader() {
        let envelope = Envelope::new(MessageKind::Get, "N1", "N2").unwrap();
        assert_eq!(envelope.leader_hint(), UNKNOWN_LEADER);
        assert!(!envelope.has_known_leader());
    }

    #[test]
    fn with_leader_keeps_the_hint() {
        let envelope = Envelope::with_leader(MessageKind::Put, "N1", "N2", "N3").unwrap();
        assert_eq!(envelope.leader_hint(), "N3");
        assert!(envelope.has_known_leader());
    }

    #[test]
    fn rejects_empty_identifiers() {
        assert_eq!(
            Envelope::new(MessageKind::Get, "", "N2").unwrap_err(),
            InvalidArgument { field: "source" }
        );
        assert_eq!(
            Envelope::new(MessageKind::Get, "N1", "").unwrap_err(),
            InvalidArgument { field: "destination" }
        );
        assert_eq!(
            Envelope::with_leader(MessageKind::Get, "N1", "N2", "").unwrap_err(),
            InvalidArgument { field: "leader_hint" }
        );
    }

    #[test]
    fn kind_tags_round_trip() {
        for kind in [MessageKind::Get, MessageKind::Put] {
            assert_eq!(kind.to_string().parse::<MessageKind>().unwrap(), kind);
        }
        assert!("fetch".parse::<MessageKind>().is_err());
    }
}
