//! Bounded byte cursor primitives for the typeio object codec.
//!
//! This crate provides [`ByteWriter`] and [`ByteReader`] for fixed-width,
//! big-endian encoding of integers, floats, booleans, raw blobs and
//! length-prefixed strings. Everything is in network byte order. Strings use
//! Java's modified UTF-8 with a `u16` byte length, as `DataOutputStream`
//! writes them.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Safety is paramount.
//! - **Bounded operations** - All reads are bounds-checked.
//! - **No domain knowledge** - This crate knows nothing about tags, content or worlds.
//! - **Explicit errors** - All failures return structured errors, never panic.
//!
//! # Example
//!
//! ```
//! use bytestream::{ByteReader, ByteWriter};
//!
//! let mut writer = ByteWriter::new();
//! writer.write_i8(-1);
//! writer.write_i16(300);
//!
//! let bytes = writer.finish();
//!
//! let mut reader = ByteReader::new(&bytes);
//! assert_eq!(reader.read_i8().unwrap(), -1);
//! assert_eq!(reader.read_i16().unwrap(), 300);
//! ```

mod error;
mod reader;
mod writer;

pub use error::{ByteError, ByteResult};
pub use reader::ByteReader;
pub use writer::ByteWriter;
