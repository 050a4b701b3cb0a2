//! Generic enum codec: ordinals on the wire, caller-supplied domains on read.
//!
//! Decoding never fails on the ordinal itself. A raw value outside the
//! domain wraps with a floored modulo, so a shrunk or reordered domain yields
//! a different but valid element. Streams encoded against another domain
//! size therefore decode to other values; this is the compatibility contract
//! and must not be tightened into a bounds check.

use bytestream::{ByteReader, ByteWriter};

use crate::error::{CodecError, CodecResult};

/// Writes an enum ordinal as an `i16`.
pub fn write_enum(writer: &mut ByteWriter, ordinal: usize) -> CodecResult<()> {
    let raw = i16::try_from(ordinal).map_err(|_| CodecError::OrdinalOverflow {
        ordinal,
        max: i16::MAX as usize,
    })?;
    writer.write_i16(raw);
    Ok(())
}

/// Reads an ordinal and maps it into `domain`.
///
/// # Errors
///
/// Fails only on truncated input or an empty domain.
pub fn read_enum<'d, T>(reader: &mut ByteReader<'_>, domain: &'d [T]) -> CodecResult<&'d T> {
    if domain.is_empty() {
        return Err(CodecError::EmptyEnumDomain);
    }
    let raw = reader.read_i16()?;
    let idx = wrap_ordinal(raw, domain.len()).ok_or(CodecError::EmptyEnumDomain)?;
    Ok(&domain[idx])
}

/// `((raw mod len) + len) mod len`, computed without overflow.
///
/// Returns `None` for an empty domain.
#[must_use]
pub fn wrap_ordinal(raw: i16, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let len = i64::try_from(len).unwrap_or(i64::MAX);
    Some(i64::from(raw).rem_euclid(len) as usize)
}
