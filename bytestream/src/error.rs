//! Error types for byte cursor operations.

use std::fmt;

/// Result type for byte cursor operations.
pub type ByteResult<T> = Result<T, ByteError>;

/// Errors that can occur while reading or writing primitive values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ByteError {
    /// Attempted to read past the end of the buffer.
    UnexpectedEof {
        /// Number of bytes requested.
        requested: usize,
        /// Number of bytes available.
        available: usize,
    },

    /// A length-prefixed string was not valid modified UTF-8.
    InvalidUtf8 {
        /// Byte offset of the string body.
        position: usize,
    },

    /// A length does not fit in its length prefix.
    LengthOverflow {
        /// The length that was attempted.
        length: usize,
        /// Maximum length the prefix can carry.
        max: usize,
    },
}

impl fmt::Display for ByteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEof {
                requested,
                available,
            } => {
                write!(
                    f,
                    "attempted to read {requested} bytes but only {available} bytes available"
                )
            }
            Self::InvalidUtf8 { position } => {
                write!(f, "invalid utf-8 in string at byte {position}")
            }
            Self::LengthOverflow { length, max } => {
                write!(f, "length {length} exceeds prefix maximum {max}")
            }
        }
    }
}

impl std::error::Error for ByteError {}
