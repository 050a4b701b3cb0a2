//! Typed codecs for plain payloads: integers, strings, blobs, vectors.

use bytestream::{ByteError, ByteReader, ByteWriter};

use crate::error::{CodecError, CodecResult, LimitKind};
use crate::limits::{check_len, CodecLimits};
use crate::types::Vec2;

/// Writes a plain 32-bit integer.
pub fn write_integer(writer: &mut ByteWriter, value: i32) {
    writer.write_i32(value);
}

/// Reads a plain 32-bit integer.
pub fn read_integer(reader: &mut ByteReader<'_>) -> CodecResult<i32> {
    Ok(reader.read_i32()?)
}

/// Writes a nullable string: a presence byte, then a `u16`-prefixed body in
/// Java's modified UTF-8.
pub fn write_string(writer: &mut ByteWriter, value: Option<&str>) -> CodecResult<()> {
    let Some(text) = value else {
        writer.write_u8(0);
        return Ok(());
    };
    let mark = writer.len();
    writer.write_u8(1);
    if let Err(err) = writer.write_utf(text) {
        writer.truncate(mark);
        return Err(match err {
            ByteError::LengthOverflow { length, max } => CodecError::LengthOverflow {
                kind: LimitKind::StringBytes,
                length,
                max,
            },
            other => other.into(),
        });
    }
    Ok(())
}

/// Reads a nullable string written by [`write_string`].
pub fn read_string(
    reader: &mut ByteReader<'_>,
    limits: &CodecLimits,
) -> CodecResult<Option<String>> {
    if !reader.read_bool()? {
        return Ok(None);
    }
    let mut peek = reader.clone();
    let len = i32::from(peek.read_u16()?);
    check_len(&peek, LimitKind::StringBytes, len, limits.max_string_bytes, 1)?;
    Ok(Some(reader.read_utf()?))
}

/// Writes a byte blob: an `i32` length, then the raw bytes.
pub fn write_blob(writer: &mut ByteWriter, bytes: &[u8]) -> CodecResult<()> {
    let len = i32::try_from(bytes.len()).map_err(|_| CodecError::LengthOverflow {
        kind: LimitKind::BlobBytes,
        length: bytes.len(),
        max: i32::MAX as usize,
    })?;
    writer.write_i32(len);
    writer.write_bytes(bytes);
    Ok(())
}

/// Reads a byte blob written by [`write_blob`].
pub fn read_blob(reader: &mut ByteReader<'_>, limits: &CodecLimits) -> CodecResult<Vec<u8>> {
    let raw = reader.read_i32()?;
    let len = check_len(reader, LimitKind::BlobBytes, raw, limits.max_blob_bytes, 1)?;
    Ok(reader.read_bytes(len)?.to_vec())
}

/// Writes a float vector as two `f32`s.
pub fn write_vec2(writer: &mut ByteWriter, value: Vec2) {
    writer.write_f32(value.x);
    writer.write_f32(value.y);
}

/// Reads a float vector.
pub fn read_vec2(reader: &mut ByteReader<'_>) -> CodecResult<Vec2> {
    let x = reader.read_f32()?;
    let y = reader.read_f32()?;
    Ok(Vec2::new(x, y))
}
