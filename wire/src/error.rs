//! Error types for wire tag operations.

use std::fmt;

/// Result type for wire tag operations.
pub type WireResult<T> = Result<T, DecodeError>;

/// Decode errors at the tag level.
///
/// These are the fatal tier: a stream that hits one cannot be interpreted
/// any further.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeError {
    /// Tag byte outside the known table.
    UnknownObjectTag { tag: i8 },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownObjectTag { tag } => {
                write!(f, "unknown object tag: {tag} (0x{:02X})", *tag as u8)
            }
        }
    }
}

impl std::error::Error for DecodeError {}
