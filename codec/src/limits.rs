//! Limits for bounded object decoding.

use bytestream::{ByteError, ByteReader};

use crate::error::{CodecError, CodecResult, LimitKind};

/// Codec-specific limits enforced while decoding objects.
///
/// Every length prefix is checked against these, and against the bytes left
/// in the input, before anything is allocated. The defaults accept anything
/// the encoder can write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecLimits {
    /// Maximum number of elements in an integer sequence (tag 6).
    pub max_int_seq_len: usize,
    /// Maximum number of points in a packed point array (tag 8).
    pub max_point_count: usize,
    /// Maximum number of bytes in a byte blob (tag 14).
    pub max_blob_bytes: usize,
    /// Maximum number of entries in a building list.
    pub max_building_list_len: usize,
    /// Maximum number of UTF-8 bytes in a string.
    pub max_string_bytes: usize,
}

impl Default for CodecLimits {
    fn default() -> Self {
        Self {
            max_int_seq_len: i16::MAX as usize,
            max_point_count: i8::MAX as usize,
            max_blob_bytes: i32::MAX as usize,
            max_building_list_len: i32::MAX as usize,
            max_string_bytes: usize::from(u16::MAX),
        }
    }
}

impl CodecLimits {
    /// Creates limits suitable for testing with smaller values.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            max_int_seq_len: 64,
            max_point_count: 16,
            max_blob_bytes: 1024,
            max_building_list_len: 64,
            max_string_bytes: 256,
        }
    }

    /// Creates limits with no restrictions (use with caution).
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_int_seq_len: usize::MAX,
            max_point_count: usize::MAX,
            max_blob_bytes: usize::MAX,
            max_building_list_len: usize::MAX,
            max_string_bytes: usize::MAX,
        }
    }
}

/// Validates a decoded length prefix before anything is allocated.
///
/// Rejects negative prefixes, prefixes above `limit`, and prefixes that
/// promise more `elem_bytes`-sized elements than the reader still holds.
pub(crate) fn check_len(
    reader: &ByteReader<'_>,
    kind: LimitKind,
    raw: i32,
    limit: usize,
    elem_bytes: usize,
) -> CodecResult<usize> {
    let len =
        usize::try_from(raw).map_err(|_| CodecError::NegativeLength { kind, length: raw })?;
    if len > limit {
        return Err(CodecError::LimitsExceeded {
            kind,
            limit,
            actual: len,
        });
    }
    let needed = len.saturating_mul(elem_bytes);
    let available = reader.remaining();
    if needed > available {
        return Err(ByteError::UnexpectedEof {
            requested: needed,
            available,
        }
        .into());
    }
    Ok(len)
}
