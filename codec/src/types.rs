//! Reference and geometry types carried by encoded objects.

/// Content categories, in wire ordinal order.
///
/// The ordinal is what goes on the wire, so variants are never reordered.
/// Retired categories keep their slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[repr(u8)]
pub enum ContentType {
    Item = 0,
    Block = 1,
    MechUnused = 2,
    Bullet = 3,
    Liquid = 4,
    Status = 5,
    Unit = 6,
    Weather = 7,
    EffectUnused = 8,
    Sector = 9,
    LoadoutUnused = 10,
    TypeIdUnused = 11,
    Error = 12,
    Planet = 13,
    AmmoUnused = 14,
    Team = 15,
    UnitCommand = 16,
    UnitStance = 17,
}

impl ContentType {
    /// Every content type, indexed by ordinal.
    pub const ALL: [Self; 18] = [
        Self::Item,
        Self::Block,
        Self::MechUnused,
        Self::Bullet,
        Self::Liquid,
        Self::Status,
        Self::Unit,
        Self::Weather,
        Self::EffectUnused,
        Self::Sector,
        Self::LoadoutUnused,
        Self::TypeIdUnused,
        Self::Error,
        Self::Planet,
        Self::AmmoUnused,
        Self::Team,
        Self::UnitCommand,
        Self::UnitStance,
    ];

    /// Looks up a content type by its wire ordinal.
    ///
    /// Returns `None` for negative or unknown ordinals.
    #[must_use]
    pub fn from_ordinal(ordinal: i8) -> Option<Self> {
        usize::try_from(ordinal)
            .ok()
            .and_then(|idx| Self::ALL.get(idx))
            .copied()
    }

    /// Returns the wire ordinal.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }
}

/// A content definition identified by category and numeric id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContentRef {
    pub content_type: ContentType,
    pub id: i16,
}

impl ContentRef {
    /// Creates a content reference.
    #[must_use]
    pub const fn new(content_type: ContentType, id: i16) -> Self {
        Self { content_type, id }
    }
}

/// Sub-kind of a block definition, used to reject stale ids on decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum BlockKind {
    StaticWall,
    Ore,
    Floor,
    Other,
}

/// A block definition with its sub-kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockRef {
    pub id: i16,
    pub kind: BlockKind,
}

impl BlockRef {
    /// Creates a block reference.
    #[must_use]
    pub const fn new(id: i16, kind: BlockKind) -> Self {
        Self { id, kind }
    }
}

/// A building placed in the world, identified by its packed tile position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildingRef {
    pub pos: i32,
}

impl BuildingRef {
    /// Creates a building reference from a packed tile position.
    #[must_use]
    pub const fn new(pos: i32) -> Self {
        Self { pos }
    }

    /// Creates a building reference from tile coordinates.
    #[must_use]
    pub const fn at(x: i16, y: i16) -> Self {
        Self {
            pos: Point2::new(x as i32, y as i32).pack(),
        }
    }

    /// Returns the tile coordinates.
    #[must_use]
    pub const fn tile(self) -> Point2 {
        Point2::unpack(self.pos)
    }
}

/// A team slot.
///
/// Team `255` shares its byte with the null sentinel and reads back as absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Team(u8);

impl Team {
    /// Creates a team from its slot id.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Returns the slot id.
    #[must_use]
    pub const fn id(self) -> u8 {
        self.0
    }
}

/// Ordinal into the logic-access enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogicAccess(u16);

impl LogicAccess {
    /// Creates a logic-access reference from its ordinal.
    #[must_use]
    pub const fn new(ordinal: u16) -> Self {
        Self(ordinal)
    }

    /// Returns the ordinal.
    #[must_use]
    pub const fn ordinal(self) -> u16 {
        self.0
    }
}

/// Ordinal into the unit-command enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitCommand(u8);

impl UnitCommand {
    /// Creates a unit-command reference from its ordinal.
    #[must_use]
    pub const fn new(ordinal: u8) -> Self {
        Self(ordinal)
    }

    /// Returns the ordinal.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self.0
    }
}

/// A 2D integer point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2 {
    pub x: i32,
    pub y: i32,
}

impl Point2 {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Packs the point into one `i32`: `x` in the high half, `y` in the low half.
    ///
    /// Only the low 16 bits of each coordinate survive.
    #[must_use]
    pub const fn pack(self) -> i32 {
        (self.x << 16) | (self.y & 0xFFFF)
    }

    /// Unpacks a point produced by [`pack`](Self::pack).
    #[must_use]
    pub const fn unpack(packed: i32) -> Self {
        Self {
            x: ((packed as u32) >> 16) as u16 as i16 as i32,
            y: (packed & 0xFFFF) as u16 as i16 as i32,
        }
    }
}

/// A 2D float vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// Creates a vector.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_ordinals_are_positions() {
        for (idx, ty) in ContentType::ALL.iter().enumerate() {
            assert_eq!(usize::from(ty.ordinal()), idx);
        }
    }

    #[test]
    fn content_type_from_ordinal() {
        assert_eq!(ContentType::from_ordinal(1), Some(ContentType::Block));
        assert_eq!(ContentType::from_ordinal(6), Some(ContentType::Unit));
        assert_eq!(ContentType::from_ordinal(17), Some(ContentType::UnitStance));
        assert_eq!(ContentType::from_ordinal(18), None);
        assert_eq!(ContentType::from_ordinal(-1), None);
    }

    #[test]
    fn point_pack_layout() {
        assert_eq!(Point2::new(1, 2).pack(), 0x0001_0002);
        assert_eq!(Point2::new(-1, -1).pack(), -1);
    }

    #[test]
    fn point_unpack_signed_halves() {
        assert_eq!(Point2::unpack(0x0001_0002), Point2::new(1, 2));
        assert_eq!(Point2::unpack(-1), Point2::new(-1, -1));
        assert_eq!(
            Point2::unpack(Point2::new(-5, 300).pack()),
            Point2::new(-5, 300)
        );
    }

    #[test]
    fn point_pack_truncates_wide_coordinates() {
        let wide = Point2::new(70_000, 0);
        assert_eq!(Point2::unpack(wide.pack()), Point2::new(70_000 - 65_536, 0));
    }

    #[test]
    fn building_tile_roundtrip() {
        let building = BuildingRef::at(10, 20);
        assert_eq!(building.tile(), Point2::new(10, 20));
        assert_eq!(BuildingRef::new(building.pos), building);
    }

    #[test]
    fn team_accessors() {
        assert_eq!(Team::new(3).id(), 3);
        assert_eq!(Team::default().id(), 0);
    }

    #[test]
    fn ordinal_newtypes() {
        assert_eq!(LogicAccess::new(12).ordinal(), 12);
        assert_eq!(UnitCommand::new(4).ordinal(), 4);
    }
}
