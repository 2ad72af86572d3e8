//! Error
//!
//! This module provides the errors needed by [`crate::Envelope`]
//! and the wire codec with [`thiserror`]
//!
use std::io;
use thiserror::Error;

/// Result use the [`WireError`] as error.
pub type Result<T> = std::result::Result<T, WireError>;

/// Errors raised while decoding wire bytes into an [`crate::Envelope`].
///
/// Each variant carries the offending field name or value, so the
/// transport layer can log exactly why a message was rejected.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("malformed message syntax: {0}")]
    /// The bytes do not parse as the wire shape.
    MalformedSyntax(#[source] serde_json::Error),

    /// A required wire field is absent.
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    /// The `type` tag is outside the closed enumeration.
    #[error("unknown message kind `{0}`")]
    UnknownKind(String),

    /// An identifier field is present but empty.
    #[error("field `{0}` must be a non-empty identifier")]
    InvalidIdentifier(&'static str),
}

/// An [`crate::Envelope`] constructor was called with an empty identifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid argument: `{field}` must be a non-empty identifier")]
pub struct InvalidArgument {
    /// The offending constructor argument.
    pub field: &'static str,
}

/// WireError is the error for moving envelopes over byte streams.
#[derive(Error, Debug)]
pub enum WireError {
    #[error("io error {0}")]
    /// IO relevant errors
    Io(#[from] io::Error),

    /// A message on the stream failed to decode.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// An envelope was built from invalid arguments.
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),
}
