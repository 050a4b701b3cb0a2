//! Object tag table.
//!
//! Tags are append-only. A tag value, once assigned, keeps its payload shape
//! forever; new kinds take the next free value.

use crate::error::DecodeError;

/// Tag written ahead of a 2D float vector. Sits below the main `0..=15` table.
pub const VEC2_SENTINEL: i8 = -1;

/// Id written in place of an absent content, block or unit-type reference.
pub const NULL_REF_ID: i16 = -1;

/// Id written in place of an absent team, or an absent unit-command index.
pub const NULL_BYTE_ID: i8 = -1;

/// Object tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum ObjectTag {
    Vec2 = VEC2_SENTINEL,
    Null = 0,
    Int = 1,
    Long = 2,
    Float = 3,
    String = 4,
    Content = 5,
    IntSeq = 6,
    Point2 = 7,
    PackedPoints = 8,
    TechNode = 9,
    Bool = 10,
    Double = 11,
    Building = 12,
    LogicAccess = 13,
    Bytes = 14,
    UnitCommand = 15,
}

impl ObjectTag {
    /// Every known tag, in wire order.
    pub const ALL: [Self; 17] = [
        Self::Vec2,
        Self::Null,
        Self::Int,
        Self::Long,
        Self::Float,
        Self::String,
        Self::Content,
        Self::IntSeq,
        Self::Point2,
        Self::PackedPoints,
        Self::TechNode,
        Self::Bool,
        Self::Double,
        Self::Building,
        Self::LogicAccess,
        Self::Bytes,
        Self::UnitCommand,
    ];

    /// Parses an object tag from a raw signed byte.
    pub fn parse(tag: i8) -> Result<Self, DecodeError> {
        match tag {
            VEC2_SENTINEL => Ok(Self::Vec2),
            0 => Ok(Self::Null),
            1 => Ok(Self::Int),
            2 => Ok(Self::Long),
            3 => Ok(Self::Float),
            4 => Ok(Self::String),
            5 => Ok(Self::Content),
            6 => Ok(Self::IntSeq),
            7 => Ok(Self::Point2),
            8 => Ok(Self::PackedPoints),
            9 => Ok(Self::TechNode),
            10 => Ok(Self::Bool),
            11 => Ok(Self::Double),
            12 => Ok(Self::Building),
            13 => Ok(Self::LogicAccess),
            14 => Ok(Self::Bytes),
            15 => Ok(Self::UnitCommand),
            _ => Err(DecodeError::UnknownObjectTag { tag }),
        }
    }

    /// Returns the raw wire byte.
    #[must_use]
    pub const fn raw(self) -> i8 {
        self as i8
    }

    /// Short lowercase name, used by tooling output.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vec2 => "vec2",
            Self::Null => "null",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::String => "string",
            Self::Content => "content",
            Self::IntSeq => "int_seq",
            Self::Point2 => "point2",
            Self::PackedPoints => "packed_points",
            Self::TechNode => "tech_node",
            Self::Bool => "bool",
            Self::Double => "double",
            Self::Building => "building",
            Self::LogicAccess => "logic_access",
            Self::Bytes => "bytes",
            Self::UnitCommand => "unit_command",
        }
    }

    /// Human-readable payload layout that follows the tag byte.
    #[must_use]
    pub const fn payload(self) -> &'static str {
        match self {
            Self::Vec2 => "f32 x, f32 y",
            Self::Null => "(none)",
            Self::Int => "i32",
            Self::Long => "i64",
            Self::Float => "f32",
            Self::String => "u8 present, [u16 len, utf-8 bytes]",
            Self::Content | Self::TechNode => "i8 content type, i16 id",
            Self::IntSeq => "i16 len, len x i32",
            Self::Point2 => "i32 x, i32 y",
            Self::PackedPoints => "i8 count, count x i32 packed point",
            Self::Bool => "u8 (0/1)",
            Self::Double => "f64",
            Self::Building => "i32 packed tile position",
            Self::LogicAccess => "i16 index",
            Self::Bytes => "i32 len, raw bytes",
            Self::UnitCommand => "i8 index",
        }
    }
}

impl TryFrom<i8> for ObjectTag {
    type Error = DecodeError;

    fn try_from(tag: i8) -> Result<Self, Self::Error> {
        Self::parse(tag)
    }
}
