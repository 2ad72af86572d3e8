//! Wire codec for [`Envelope`].
//!
//! The wire format is a keyed JSON object with a stable field order:
//!
//! ```text
//! {"type":"get"|"put","src":"<id>","dest":"<id>","leader":"<id>"}
//! ```
//!
//! Encoding is total for any constructed envelope. Decoding validates
//! before an envelope is produced and is all-or-nothing: a failure at any
//! step discards the whole message.

use serde::Deserialize;

use crate::envelope::{Envelope, MessageKind, UNKNOWN_LEADER};
use crate::error::DecodeError;

/// Inbound wire shape before validation.
///
/// Every field is optional so presence is checked here, per field, rather
/// than inside serde. Unknown extra fields are skipped.
#[derive(Deserialize)]
struct WireEnvelope {
    #[serde(rename = "type")]
    kind: Option<String>,
    src: Option<String>,
    dest: Option<String>,
    leader: Option<String>,
}

/// Encode an envelope to its wire bytes.
///
/// Deterministic for a given envelope: field order is always `type`,
/// `src`, `dest`, `leader`, and the leader field is emitted even when it
/// holds the unknown-leader sentinel.
pub fn encode(envelope: &Envelope) -> Vec<u8> {
    encode_to_string(envelope).into_bytes()
}

/// Encode an envelope to its wire text.
pub fn encode_to_string(envelope: &Envelope) -> String {
    // A struct of plain strings always serializes.
    serde_json::to_string(envelope).expect("envelope serialization is infallible")
}

/// Decode wire bytes into an [`Envelope`].
///
/// Validation order: syntax, field presence, kind tag, identifier
/// non-emptiness, leader hint. An absent leader field decodes as
/// [`UNKNOWN_LEADER`]; an empty one is rejected.
pub fn decode(bytes: &[u8]) -> Result<Envelope, DecodeError> {
    let wire: WireEnvelope = serde_json::from_slice(bytes).map_err(DecodeError::MalformedSyntax)?;

    let kind_tag = wire.kind.ok_or(DecodeError::MissingField("type"))?;
    let source = wire.src.ok_or(DecodeError::MissingField("src"))?;
    let destination = wire.dest.ok_or(DecodeError::MissingField("dest"))?;

    let kind = match MessageKind::from_wire_tag(&kind_tag) {
        Some(kind) => kind,
        None => return Err(DecodeError::UnknownKind(kind_tag)),
    };
    if source.is_empty() {
        return Err(DecodeError::InvalidIdentifier("src"));
    }
    if destination.is_empty() {
        return Err(DecodeError::InvalidIdentifier("dest"));
    }
    let leader_hint = match wire.leader {
        None => UNKNOWN_LEADER.to_string(),
        Some(leader) if leader.is_empty() => {
            return Err(DecodeError::InvalidIdentifier("leader"));
        }
        Some(leader) => leader,
    };

    Ok(Envelope::from_wire_parts(
        kind,
        source,
        destination,
        leader_hint,
    ))
}

/// Decode a wire message held in a `&str`.
pub fn decode_str(s: &str) -> Result<Envelope, DecodeError> {
    decode(s.as_bytes())
}
