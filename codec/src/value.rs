//! The closed set of values an object tag can carry.

use wire::ObjectTag;

use crate::types::{BuildingRef, ContentRef, LogicAccess, Point2, UnitCommand, Vec2};

/// A decoded object, one variant per wire tag.
///
/// Absent references (stale ids, empty tiles, null sentinels) all decode to
/// [`Value::Null`].
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", content = "value", rename_all = "snake_case")
)]
pub enum Value {
    #[default]
    Null,
    Int(i32),
    Long(i64),
    Float(f32),
    String(String),
    Content(ContentRef),
    IntSeq(Vec<i32>),
    Point2(Point2),
    /// Points packed into one `i32` each; coordinates keep only 16 bits.
    PackedPoints(Vec<Point2>),
    /// Unlockable content that must resolve to a tech-tree node.
    TechNode(ContentRef),
    Bool(bool),
    Double(f64),
    Building(BuildingRef),
    LogicAccess(LogicAccess),
    Bytes(Vec<u8>),
    UnitCommand(UnitCommand),
    Vec2(Vec2),
}

impl Value {
    /// Returns the tag this value is written with.
    #[must_use]
    pub const fn tag(&self) -> ObjectTag {
        match self {
            Self::Null => ObjectTag::Null,
            Self::Int(_) => ObjectTag::Int,
            Self::Long(_) => ObjectTag::Long,
            Self::Float(_) => ObjectTag::Float,
            Self::String(_) => ObjectTag::String,
            Self::Content(_) => ObjectTag::Content,
            Self::IntSeq(_) => ObjectTag::IntSeq,
            Self::Point2(_) => ObjectTag::Point2,
            Self::PackedPoints(_) => ObjectTag::PackedPoints,
            Self::TechNode(_) => ObjectTag::TechNode,
            Self::Bool(_) => ObjectTag::Bool,
            Self::Double(_) => ObjectTag::Double,
            Self::Building(_) => ObjectTag::Building,
            Self::LogicAccess(_) => ObjectTag::LogicAccess,
            Self::Bytes(_) => ObjectTag::Bytes,
            Self::UnitCommand(_) => ObjectTag::UnitCommand,
            Self::Vec2(_) => ObjectTag::Vec2,
        }
    }

    /// Returns `true` for [`Value::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_from! {
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    bool => Bool,
    String => String,
    Vec<i32> => IntSeq,
    Vec<u8> => Bytes,
    Point2 => Point2,
    Vec2 => Vec2,
    ContentRef => Content,
    BuildingRef => Building,
    LogicAccess => LogicAccess,
    UnitCommand => UnitCommand,
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
