//! Byte-level reader with bounded operations.

use std::borrow::Cow;

use crate::error::{ByteError, ByteResult};

/// A big-endian reader for decoding primitive values.
///
/// All read operations are bounds-checked and return errors on failure.
/// The reader never panics on malformed input. It is `Clone` so callers can
/// probe ahead and only commit the new position on success.
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    /// Creates a new `ByteReader` from a byte slice.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the number of bytes remaining to read.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Returns `true` if there are no more bytes to read.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Returns the current byte position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Reads a signed byte.
    pub fn read_i8(&mut self) -> ByteResult<i8> {
        let [b] = self.read_array::<1>()?;
        Ok(i8::from_be_bytes([b]))
    }

    /// Reads an unsigned byte.
    pub fn read_u8(&mut self) -> ByteResult<u8> {
        let [b] = self.read_array::<1>()?;
        Ok(b)
    }

    /// Reads a boolean byte. Any non-zero value is `true`.
    pub fn read_bool(&mut self) -> ByteResult<bool> {
        Ok(self.read_u8()? != 0)
    }

    /// Reads a big-endian `i16`.
    pub fn read_i16(&mut self) -> ByteResult<i16> {
        Ok(i16::from_be_bytes(self.read_array()?))
    }

    /// Reads a big-endian `u16`.
    pub fn read_u16(&mut self) -> ByteResult<u16> {
        Ok(u16::from_be_bytes(self.read_array()?))
    }

    /// Reads a big-endian `i32`.
    pub fn read_i32(&mut self) -> ByteResult<i32> {
        Ok(i32::from_be_bytes(self.read_array()?))
    }

    /// Reads a big-endian `i64`.
    pub fn read_i64(&mut self) -> ByteResult<i64> {
        Ok(i64::from_be_bytes(self.read_array()?))
    }

    /// Reads a big-endian IEEE-754 `f32`.
    pub fn read_f32(&mut self) -> ByteResult<f32> {
        Ok(f32::from_bits(u32::from_be_bytes(self.read_array()?)))
    }

    /// Reads a big-endian IEEE-754 `f64`.
    pub fn read_f64(&mut self) -> ByteResult<f64> {
        Ok(f64::from_bits(u64::from_be_bytes(self.read_array()?)))
    }

    /// Reads `len` raw bytes, borrowing them from the underlying buffer.
    pub fn read_bytes(&mut self, len: usize) -> ByteResult<&'a [u8]> {
        self.ensure_bytes(len)?;
        let out = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(out)
    }

    /// Reads a `u16`-length-prefixed string in Java's modified UTF-8.
    ///
    /// Plain UTF-8 bodies are accepted as well. The position is left
    /// untouched if the string is truncated or invalid.
    pub fn read_utf(&mut self) -> ByteResult<String> {
        let mut probe = self.clone();
        let len = usize::from(probe.read_u16()?);
        let position = probe.pos;
        let body = probe.read_bytes(len)?;
        let value = cesu8::from_java_cesu8(body)
            .map(Cow::into_owned)
            .map_err(|_| ByteError::InvalidUtf8 { position })?;
        *self = probe;
        Ok(value)
    }

    fn ensure_bytes(&self, bytes: usize) -> ByteResult<()> {
        let available = self.remaining();
        if bytes > available {
            return Err(ByteError::UnexpectedEof {
                requested: bytes,
                available,
            });
        }
        Ok(())
    }

    fn read_array<const N: usize>(&mut self) -> ByteResult<[u8; N]> {
        self.ensure_bytes(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(&self.data[self.pos..self.pos + N]);
        self.pos += N;
        Ok(out)
    }
}
