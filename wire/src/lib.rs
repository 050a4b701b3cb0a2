//! Wire tag table for the typeio object codec.
//!
//! This crate owns the binary compatibility contract: the tag byte that
//! prefixes every encoded object, the payload layout behind each tag, and the
//! reserved sentinel ids. It does not know about registries or values, only
//! the structure of the stream.
//!
//! # Design Principles
//!
//! - **Append-only tags** - Values are never renumbered across versions.
//! - **Closed table** - Unknown tags are a hard decode error.
//! - **No domain knowledge** - Resolution of ids happens in the codec layer.

mod error;
mod tag;

pub use error::{DecodeError, WireResult};
pub use tag::{ObjectTag, NULL_BYTE_ID, NULL_REF_ID, VEC2_SENTINEL};
