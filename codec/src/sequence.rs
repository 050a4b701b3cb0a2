//! Count-prefixed homogeneous sequences.

use bytestream::{ByteReader, ByteWriter};

use crate::error::{CodecError, CodecResult, LimitKind};
use crate::limits::{check_len, CodecLimits};
use crate::reference::{read_building, write_building};
use crate::registry::WorldGrid;
use crate::types::{BuildingRef, Point2};

/// Writes an integer sequence: `i16` length, then `i32` elements.
pub fn write_int_seq(writer: &mut ByteWriter, values: &[i32]) -> CodecResult<()> {
    let len = prefix::<i16>(values.len(), LimitKind::IntSeq)?;
    writer.write_i16(len);
    for value in values {
        writer.write_i32(*value);
    }
    Ok(())
}

/// Reads an integer sequence written by [`write_int_seq`].
///
/// A negative length reads as an empty sequence.
pub fn read_int_seq(reader: &mut ByteReader<'_>, limits: &CodecLimits) -> CodecResult<Vec<i32>> {
    let raw = i32::from(reader.read_i16()?).max(0);
    let len = check_len(reader, LimitKind::IntSeq, raw, limits.max_int_seq_len, 4)?;
    let mut out = Vec::with_capacity(len);
    for _ in 0..len {
        out.push(reader.read_i32()?);
    }
    Ok(out)
}

/// Writes a point array: `i8` count, then one packed `i32` per point.
pub fn write_packed_points(writer: &mut ByteWriter, points: &[Point2]) -> CodecResult<()> {
    let count = prefix::<i8>(points.len(), LimitKind::PointCount)?;
    writer.write_i8(count);
    for point in points {
        writer.write_i32(point.pack());
    }
    Ok(())
}

/// Reads a point array written by [`write_packed_points`].
pub fn read_packed_points(
    reader: &mut ByteReader<'_>,
    limits: &CodecLimits,
) -> CodecResult<Vec<Point2>> {
    let raw = i32::from(reader.read_i8()?);
    let len = check_len(reader, LimitKind::PointCount, raw, limits.max_point_count, 4)?;
    let mut out = Vec::with_capacity(len);
    for _ in 0..len {
        out.push(Point2::unpack(reader.read_i32()?));
    }
    Ok(out)
}

/// Writes a building list: `i32` count, then each building's tile position.
///
/// Absent entries are written with the null tile position.
pub fn write_building_seq(
    writer: &mut ByteWriter,
    buildings: &[Option<BuildingRef>],
) -> CodecResult<()> {
    let count = prefix::<i32>(buildings.len(), LimitKind::BuildingList)?;
    writer.write_i32(count);
    for building in buildings {
        write_building(writer, building.as_ref());
    }
    Ok(())
}

/// Reads a building list, resolving each entry against the world grid.
///
/// Entries that no longer resolve stay in place as `None`, so order and
/// length match what was written. A negative count reads as an empty list.
pub fn read_building_seq(
    reader: &mut ByteReader<'_>,
    world: &dyn WorldGrid,
    limits: &CodecLimits,
) -> CodecResult<Vec<Option<BuildingRef>>> {
    let raw = reader.read_i32()?.max(0);
    let len = check_len(
        reader,
        LimitKind::BuildingList,
        raw,
        limits.max_building_list_len,
        4,
    )?;
    let mut out = Vec::with_capacity(len);
    for _ in 0..len {
        out.push(read_building(reader, world)?);
    }
    Ok(out)
}

fn prefix<P>(len: usize, kind: LimitKind) -> CodecResult<P>
where
    P: TryFrom<usize> + Bounded,
{
    P::try_from(len).map_err(|_| CodecError::LengthOverflow {
        kind,
        length: len,
        max: P::MAX_LEN,
    })
}

trait Bounded {
    const MAX_LEN: usize;
}

impl Bounded for i8 {
    const MAX_LEN: usize = i8::MAX as usize;
}

impl Bounded for i16 {
    const MAX_LEN: usize = i16::MAX as usize;
}

impl Bounded for i32 {
    const MAX_LEN: usize = i32::MAX as usize;
}
