//! Tagged object encoding/decoding.
//!
//! Every object is one signed tag byte followed by the payload for that tag.
//! Decoding branches on the tag; an unknown tag is the only fatal outcome
//! that is not simply running out of input. Reference payloads that no
//! longer resolve decode to [`Value::Null`].

use bytestream::{ByteReader, ByteWriter};
use wire::ObjectTag;

use crate::error::CodecResult;
use crate::limits::CodecLimits;
use crate::primitive::{read_blob, read_string, read_vec2, write_blob, write_string, write_vec2};
use crate::reference::{
    read_building, read_content, read_logic_access, read_unit_command, write_content,
    write_logic_access, write_unit_command,
};
use crate::registry::DecodeContext;
use crate::sequence::{read_int_seq, read_packed_points, write_int_seq, write_packed_points};
use crate::types::Point2;
use crate::value::Value;

/// Encodes one tagged object.
///
/// On error the writer is rolled back to its length before the call.
pub fn write_object(writer: &mut ByteWriter, value: &Value) -> CodecResult<()> {
    let mark = writer.len();
    let result = write_tagged(writer, value);
    if let Err(err) = &result {
        tracing::debug!(tag = ?value.tag(), error = %err, "object encode rolled back");
        writer.truncate(mark);
    }
    result
}

/// Decodes one tagged object.
///
/// On error the reader is left where it was before the call.
pub fn read_object(
    reader: &mut ByteReader<'_>,
    ctx: &DecodeContext<'_>,
    limits: &CodecLimits,
) -> CodecResult<Value> {
    let mut probe = reader.clone();
    let start = probe.position();
    let raw = probe.read_i8()?;
    let tag = ObjectTag::parse(raw).map_err(|err| {
        tracing::debug!(tag = raw, position = start, "unknown object tag");
        err
    })?;
    let value = read_payload(&mut probe, tag, ctx, limits)?;
    *reader = probe;
    Ok(value)
}

/// Encodes a sequence of objects back to back.
pub fn encode_objects(values: &[Value]) -> CodecResult<Vec<u8>> {
    // Tag plus the common four-byte payload.
    let mut writer = ByteWriter::with_capacity(values.len() * 5);
    for value in values {
        write_object(&mut writer, value)?;
    }
    Ok(writer.finish())
}

/// Decodes objects until the input is exhausted.
pub fn decode_objects(
    bytes: &[u8],
    ctx: &DecodeContext<'_>,
    limits: &CodecLimits,
) -> CodecResult<Vec<Value>> {
    let mut reader = ByteReader::new(bytes);
    let mut out = Vec::new();
    while !reader.is_empty() {
        out.push(read_object(&mut reader, ctx, limits)?);
    }
    Ok(out)
}

fn write_tagged(writer: &mut ByteWriter, value: &Value) -> CodecResult<()> {
    writer.write_i8(value.tag().raw());
    match value {
        // Framed with the sentinel tag below the main table.
        Value::Vec2(vec) => write_vec2(writer, *vec),
        Value::Null => {}
        Value::Int(v) => writer.write_i32(*v),
        Value::Long(v) => writer.write_i64(*v),
        Value::Float(v) => writer.write_f32(*v),
        Value::String(v) => write_string(writer, Some(v))?,
        Value::Content(content) | Value::TechNode(content) => write_content(writer, content),
        Value::IntSeq(values) => write_int_seq(writer, values)?,
        Value::Point2(point) => {
            writer.write_i32(point.x);
            writer.write_i32(point.y);
        }
        Value::PackedPoints(points) => write_packed_points(writer, points)?,
        Value::Bool(v) => writer.write_bool(*v),
        Value::Double(v) => writer.write_f64(*v),
        Value::Building(building) => writer.write_i32(building.pos),
        Value::LogicAccess(access) => write_logic_access(writer, Some(*access))?,
        Value::Bytes(bytes) => write_blob(writer, bytes)?,
        Value::UnitCommand(command) => write_unit_command(writer, Some(*command))?,
    }
    Ok(())
}

fn read_payload(
    reader: &mut ByteReader<'_>,
    tag: ObjectTag,
    ctx: &DecodeContext<'_>,
    limits: &CodecLimits,
) -> CodecResult<Value> {
    let value = match tag {
        ObjectTag::Vec2 => Value::Vec2(read_vec2(reader)?),
        ObjectTag::Null => Value::Null,
        ObjectTag::Int => Value::Int(reader.read_i32()?),
        ObjectTag::Long => Value::Long(reader.read_i64()?),
        ObjectTag::Float => Value::Float(reader.read_f32()?),
        ObjectTag::String => read_string(reader, limits)?.into(),
        ObjectTag::Content => read_content(reader, ctx.content)?.into(),
        ObjectTag::IntSeq => Value::IntSeq(read_int_seq(reader, limits)?),
        ObjectTag::Point2 => {
            let x = reader.read_i32()?;
            let y = reader.read_i32()?;
            Value::Point2(Point2::new(x, y))
        }
        ObjectTag::PackedPoints => Value::PackedPoints(read_packed_points(reader, limits)?),
        ObjectTag::TechNode => read_tech_node(reader, ctx)?,
        ObjectTag::Bool => Value::Bool(reader.read_bool()?),
        ObjectTag::Double => Value::Double(reader.read_f64()?),
        ObjectTag::Building => read_building(reader, ctx.world)?.into(),
        ObjectTag::LogicAccess => read_logic_access(reader, &ctx.enums)?.into(),
        ObjectTag::Bytes => Value::Bytes(read_blob(reader, limits)?),
        ObjectTag::UnitCommand => read_unit_command(reader, &ctx.enums)?.into(),
    };
    Ok(value)
}

fn read_tech_node(reader: &mut ByteReader<'_>, ctx: &DecodeContext<'_>) -> CodecResult<Value> {
    // The node must exist for any content that still resolves.
    Ok(read_content(reader, ctx.content)?.map_or(Value::Null, Value::TechNode))
}
