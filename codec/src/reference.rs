//! Codecs for references resolved through a live registry.
//!
//! Every reference kind reserves a null sentinel (`-1` at its wire width)
//! that short-circuits before any lookup. Ids that no longer resolve, or that
//! resolve to a different sub-kind than expected, decode to `None` rather
//! than an error.

use bytestream::{ByteReader, ByteWriter};
use wire::{NULL_BYTE_ID, NULL_REF_ID};

use crate::error::{CodecError, CodecResult};
use crate::registry::{ContentRegistry, EnumDomains, WorldGrid};
use crate::types::{
    BlockKind, BlockRef, BuildingRef, ContentRef, ContentType, LogicAccess, Team, UnitCommand,
};

/// Packed tile position reserved for an absent building.
pub const NULL_BUILDING_POS: i32 = -1;

/// Writes a content reference as content type ordinal then id.
pub fn write_content(writer: &mut ByteWriter, content: &ContentRef) {
    writer.write_u8(content.content_type.ordinal());
    writer.write_i16(content.id);
}

/// Reads a content reference written by [`write_content`].
///
/// A `-1` id, an unknown content type or an unresolved id yield `None`.
pub fn read_content(
    reader: &mut ByteReader<'_>,
    registry: &dyn ContentRegistry,
) -> CodecResult<Option<ContentRef>> {
    let ordinal = reader.read_i8()?;
    let id = reader.read_i16()?;
    if id == NULL_REF_ID {
        return Ok(None);
    }
    Ok(ContentType::from_ordinal(ordinal).and_then(|ty| registry.content(ty, id)))
}

/// Writes a block reference as its id, or `-1` when absent.
///
/// Static walls, ores and floors all share this layout.
pub fn write_block(writer: &mut ByteWriter, block: Option<&BlockRef>) {
    writer.write_i16(block.map_or(NULL_REF_ID, |block| block.id));
}

/// Reads a block reference and keeps it only if it is of the `expected` kind.
pub fn read_block(
    reader: &mut ByteReader<'_>,
    registry: &dyn ContentRegistry,
    expected: BlockKind,
) -> CodecResult<Option<BlockRef>> {
    let id = reader.read_i16()?;
    if id == NULL_REF_ID {
        return Ok(None);
    }
    Ok(registry.block(id).filter(|block| block.kind == expected))
}

/// Reads a static-wall block reference.
pub fn read_static_wall(
    reader: &mut ByteReader<'_>,
    registry: &dyn ContentRegistry,
) -> CodecResult<Option<BlockRef>> {
    read_block(reader, registry, BlockKind::StaticWall)
}

/// Reads an ore block reference.
pub fn read_ore(
    reader: &mut ByteReader<'_>,
    registry: &dyn ContentRegistry,
) -> CodecResult<Option<BlockRef>> {
    read_block(reader, registry, BlockKind::Ore)
}

/// Reads a floor block reference.
pub fn read_floor(
    reader: &mut ByteReader<'_>,
    registry: &dyn ContentRegistry,
) -> CodecResult<Option<BlockRef>> {
    read_block(reader, registry, BlockKind::Floor)
}

/// Writes a team as its signed byte id, or `-1` when absent.
pub fn write_team(writer: &mut ByteWriter, team: Option<Team>) {
    writer.write_i8(team.map_or(NULL_BYTE_ID, |team| team.id() as i8));
}

/// Reads a team. Negative bytes other than `-1` wrap into the upper slots,
/// so team 255 shares its byte with the absent marker and reads as `None`.
pub fn read_team(reader: &mut ByteReader<'_>) -> CodecResult<Option<Team>> {
    let id = reader.read_i8()?;
    if id == NULL_BYTE_ID {
        return Ok(None);
    }
    Ok(Some(Team::new(id as u8)))
}

/// Writes a unit type as its `i16` id, or `-1` when absent.
pub fn write_unit_type(writer: &mut ByteWriter, unit_type: Option<&ContentRef>) {
    writer.write_i16(unit_type.map_or(NULL_REF_ID, |unit| unit.id));
}

/// Reads a unit type, resolving the id in the unit category.
pub fn read_unit_type(
    reader: &mut ByteReader<'_>,
    registry: &dyn ContentRegistry,
) -> CodecResult<Option<ContentRef>> {
    let id = reader.read_i16()?;
    if id == NULL_REF_ID {
        return Ok(None);
    }
    Ok(registry.content(ContentType::Unit, id))
}

/// Writes a building as its packed tile position, or `-1` when absent.
pub fn write_building(writer: &mut ByteWriter, building: Option<&BuildingRef>) {
    writer.write_i32(building.map_or(NULL_BUILDING_POS, |building| building.pos));
}

/// Reads a building and resolves it against the world grid.
pub fn read_building(
    reader: &mut ByteReader<'_>,
    world: &dyn WorldGrid,
) -> CodecResult<Option<BuildingRef>> {
    let pos = reader.read_i32()?;
    if pos == NULL_BUILDING_POS {
        return Ok(None);
    }
    Ok(world.building(pos))
}

/// Writes a logic-access index as an `i16`, or `-1` when absent.
pub fn write_logic_access(
    writer: &mut ByteWriter,
    access: Option<LogicAccess>,
) -> CodecResult<()> {
    let raw = match access {
        Some(access) => {
            i16::try_from(access.ordinal()).map_err(|_| CodecError::OrdinalOverflow {
                ordinal: usize::from(access.ordinal()),
                max: i16::MAX as usize,
            })?
        }
        None => NULL_REF_ID,
    };
    writer.write_i16(raw);
    Ok(())
}

/// Reads a logic-access index. Out-of-domain indices yield `None`.
pub fn read_logic_access(
    reader: &mut ByteReader<'_>,
    domains: &EnumDomains,
) -> CodecResult<Option<LogicAccess>> {
    Ok(domains.logic_access(reader.read_i16()?))
}

/// Writes a unit-command index as an `i8`, or `-1` when absent.
pub fn write_unit_command(
    writer: &mut ByteWriter,
    command: Option<UnitCommand>,
) -> CodecResult<()> {
    let raw = match command {
        Some(command) => {
            i8::try_from(command.ordinal()).map_err(|_| CodecError::OrdinalOverflow {
                ordinal: usize::from(command.ordinal()),
                max: i8::MAX as usize,
            })?
        }
        None => NULL_BYTE_ID,
    };
    writer.write_i8(raw);
    Ok(())
}

/// Reads a unit-command index. Out-of-domain indices yield `None`.
pub fn read_unit_command(
    reader: &mut ByteReader<'_>,
    domains: &EnumDomains,
) -> CodecResult<Option<UnitCommand>> {
    Ok(domains.unit_command(reader.read_i8()?))
}
