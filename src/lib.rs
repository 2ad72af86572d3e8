#![deny(missing_docs)]
//! # kvwire
//!
//! Wire envelope codec for a replicated key-value protocol: the typed
//! message shape exchanged between nodes, a keyed and order-stable JSON
//! encoding of it, and line framing for byte streams.
//!
//! ## Example Usage
//!
//! ```rust
//! use kvwire::{Envelope, MessageKind, codec};
//!
//! let envelope = Envelope::with_leader(MessageKind::Put, "N1", "N2", "N1").unwrap();
//! let wire = codec::encode(&envelope);
//!
//! assert_eq!(codec::decode(&wire).unwrap(), envelope);
//! ```
pub mod envelope;

pub mod codec;

pub mod stream;

pub mod error;

pub use crate::envelope::{Envelope, MessageKind, UNKNOWN_LEADER};
pub use crate::error::{DecodeError, InvalidArgument, Result, WireError};
