//! Lookup interfaces consulted while decoding references.
//!
//! The codec never owns game state. Decoders borrow these read-only views for
//! the duration of a single call; callers must keep them stable (for example
//! by decoding between simulation ticks).

use crate::types::{BlockRef, BuildingRef, ContentRef, ContentType, LogicAccess, UnitCommand};

/// Content table: definitions addressed by category and numeric id.
pub trait ContentRegistry {
    /// Resolves a content definition. `None` if the id is unknown.
    fn content(&self, content_type: ContentType, id: i16) -> Option<ContentRef>;

    /// Resolves a block definition together with its sub-kind.
    fn block(&self, id: i16) -> Option<BlockRef>;
}

/// Live world grid: buildings addressed by packed tile position.
pub trait WorldGrid {
    /// Resolves the building covering `pos`. `None` if the tile is empty or
    /// out of bounds.
    fn building(&self, pos: i32) -> Option<BuildingRef>;
}

/// Sizes of the fixed enumerations resolved by plain index lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumDomains {
    /// Number of logic-access values.
    pub logic_access: usize,
    /// Number of unit commands.
    pub unit_commands: usize,
}

impl EnumDomains {
    /// Creates domain sizes.
    #[must_use]
    pub const fn new(logic_access: usize, unit_commands: usize) -> Self {
        Self {
            logic_access,
            unit_commands,
        }
    }

    /// Domains that accept every non-negative index.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            logic_access: usize::MAX,
            unit_commands: usize::MAX,
        }
    }

    /// Resolves a logic-access index. `None` if negative or out of range.
    #[must_use]
    pub fn logic_access(&self, index: i16) -> Option<LogicAccess> {
        let ordinal = u16::try_from(index).ok()?;
        (usize::from(ordinal) < self.logic_access).then(|| LogicAccess::new(ordinal))
    }

    /// Resolves a unit-command index. `None` if negative or out of range.
    #[must_use]
    pub fn unit_command(&self, index: i8) -> Option<UnitCommand> {
        let ordinal = u8::try_from(index).ok()?;
        (usize::from(ordinal) < self.unit_commands).then(|| UnitCommand::new(ordinal))
    }
}

/// Everything a decoder may consult, borrowed for one decode pass.
#[derive(Clone, Copy)]
pub struct DecodeContext<'a> {
    pub content: &'a dyn ContentRegistry,
    pub world: &'a dyn WorldGrid,
    pub enums: EnumDomains,
}

impl<'a> DecodeContext<'a> {
    /// Bundles the lookups for a decode pass.
    #[must_use]
    pub const fn new(
        content: &'a dyn ContentRegistry,
        world: &'a dyn WorldGrid,
        enums: EnumDomains,
    ) -> Self {
        Self {
            content,
            world,
            enums,
        }
    }
}

impl std::fmt::Debug for DecodeContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecodeContext")
            .field("enums", &self.enums)
            .finish_non_exhaustive()
    }
}
