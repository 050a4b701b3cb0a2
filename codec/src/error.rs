//! Error types for codec operations.

use std::fmt;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while encoding or decoding objects.
///
/// Stale ids and out-of-range ordinals are not errors: they decode to an
/// absent reference or a wrapped ordinal instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Wire format error (unknown tag).
    Wire(wire::DecodeError),

    /// Byte cursor error (truncated input, invalid UTF-8, prefix overflow).
    Bytestream(bytestream::ByteError),

    /// A decoded length exceeds the configured limit.
    LimitsExceeded {
        kind: LimitKind,
        limit: usize,
        actual: usize,
    },

    /// A decoded length prefix is negative.
    NegativeLength { kind: LimitKind, length: i32 },

    /// A value is too long for its length prefix on encode.
    LengthOverflow {
        kind: LimitKind,
        length: usize,
        max: usize,
    },

    /// Enum decode was given an empty domain.
    EmptyEnumDomain,

    /// An ordinal does not fit in its wire width on encode.
    OrdinalOverflow { ordinal: usize, max: usize },
}

/// Length-prefixed payloads subject to limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitKind {
    IntSeq,
    PointCount,
    BlobBytes,
    BuildingList,
    StringBytes,
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wire(e) => write!(f, "wire error: {e}"),
            Self::Bytestream(e) => write!(f, "bytestream error: {e}"),
            Self::LimitsExceeded {
                kind,
                limit,
                actual,
            } => {
                write!(f, "{kind} limit exceeded: {actual} > {limit}")
            }
            Self::NegativeLength { kind, length } => {
                write!(f, "negative {kind} length prefix: {length}")
            }
            Self::LengthOverflow { kind, length, max } => {
                write!(f, "{kind} length {length} does not fit prefix (max {max})")
            }
            Self::EmptyEnumDomain => write!(f, "cannot decode enum against an empty domain"),
            Self::OrdinalOverflow { ordinal, max } => {
                write!(f, "ordinal {ordinal} exceeds wire maximum {max}")
            }
        }
    }
}

impl fmt::Display for LimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::IntSeq => "int sequence",
            Self::PointCount => "point count",
            Self::BlobBytes => "blob bytes",
            Self::BuildingList => "building list",
            Self::StringBytes => "string bytes",
        };
        write!(f, "{name}")
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Wire(e) => Some(e),
            Self::Bytestream(e) => Some(e),
            _ => None,
        }
    }
}

impl From<wire::DecodeError> for CodecError {
    fn from(err: wire::DecodeError) -> Self {
        Self::Wire(err)
    }
}

impl From<bytestream::ByteError> for CodecError {
    fn from(err: bytestream::ByteError) -> Self {
        Self::Bytestream(err)
    }
}
