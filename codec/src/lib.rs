//! Tagged object encoding/decoding for network sync and save state.
//!
//! This crate ties bytestream and wire together with a closed [`Value`]
//! model and injected registries. Objects are written as a tag byte plus a
//! fixed payload; references (content, blocks, buildings, teams, enum
//! ordinals) are resolved through caller-supplied lookups at decode time.
//!
//! # Features
//!
//! - Object dispatcher over the full tag table ([`write_object`], [`read_object`])
//! - Typed codecs for references, enums, sequences and plain payloads
//! - Tolerant decoding of stale references and shifted enum domains
//! - Bounded decoding via [`CodecLimits`]
//!
//! # Design Principles
//!
//! - **Tolerant where skew is expected** - Stale ids decode to absent, enum
//!   ordinals wrap into the current domain.
//! - **Fatal where the stream is unreadable** - Unknown tags and truncated
//!   payloads are errors, and leave the cursor untouched.
//! - **No ambient state** - Registries are borrowed per call.
//!
//! # Example
//!
//! ```
//! use codec::{
//!     decode_objects, encode_objects, BlockRef, BuildingRef, CodecLimits, ContentRef,
//!     ContentRegistry, ContentType, DecodeContext, EnumDomains, Value, WorldGrid,
//! };
//!
//! struct Empty;
//!
//! impl ContentRegistry for Empty {
//!     fn content(&self, _: ContentType, _: i16) -> Option<ContentRef> {
//!         None
//!     }
//!     fn block(&self, _: i16) -> Option<BlockRef> {
//!         None
//!     }
//! }
//!
//! impl WorldGrid for Empty {
//!     fn building(&self, _: i32) -> Option<BuildingRef> {
//!         None
//!     }
//! }
//!
//! let bytes = encode_objects(&[Value::Int(7), Value::from("core")]).unwrap();
//! let ctx = DecodeContext::new(&Empty, &Empty, EnumDomains::new(0, 0));
//! let values = decode_objects(&bytes, &ctx, &CodecLimits::default()).unwrap();
//! assert_eq!(values, vec![Value::Int(7), Value::from("core")]);
//! ```

mod enums;
mod error;
mod limits;
mod object;
mod primitive;
mod reference;
mod registry;
mod sequence;
mod types;
mod value;

pub use enums::{read_enum, wrap_ordinal, write_enum};
pub use error::{CodecError, CodecResult, LimitKind};
pub use limits::CodecLimits;
pub use object::{decode_objects, encode_objects, read_object, write_object};
pub use primitive::{
    read_blob, read_integer, read_string, read_vec2, write_blob, write_integer, write_string,
    write_vec2,
};
pub use reference::{
    read_block, read_building, read_content, read_floor, read_logic_access, read_ore,
    read_static_wall, read_team, read_unit_command, read_unit_type, write_block, write_building,
    write_content, write_logic_access, write_team, write_unit_command, write_unit_type,
    NULL_BUILDING_POS,
};
pub use registry::{ContentRegistry, DecodeContext, EnumDomains, WorldGrid};
pub use sequence::{
    read_building_seq, read_int_seq, read_packed_points, write_building_seq, write_int_seq,
    write_packed_points,
};
pub use types::{
    BlockKind, BlockRef, BuildingRef, ContentRef, ContentType, LogicAccess, Point2, Team,
    UnitCommand, Vec2,
};
pub use value::Value;
pub use wire::ObjectTag;
