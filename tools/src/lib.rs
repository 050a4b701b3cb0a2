//! Inspection and conversion tools for typeio object streams.
//!
//! This crate provides utilities for looking inside encoded streams without a
//! live game behind them:
//!
//! - Walk a stream object by object with offsets and sizes
//! - Decode a stream to JSON or a readable listing
//! - Encode a JSON listing back to bytes
//!
//! # Design Principles
//!
//! - **First-class tooling** - These tools are part of the product, not afterthoughts.
//! - **Human-readable output** - Make it easy to see what the codec is doing.
//! - **No registry required** - References resolve to themselves, so stale ids
//!   are shown as written instead of as null.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use bytestream::ByteReader;
use codec::{
    read_object, BlockKind, BlockRef, BuildingRef, CodecLimits, ContentRef, ContentRegistry,
    ContentType, DecodeContext, EnumDomains, Value, WorldGrid,
};
use serde::Serialize;
use wire::ObjectTag;

/// Registry that resolves every reference to exactly what was written.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassThroughRegistry;

impl ContentRegistry for PassThroughRegistry {
    fn content(&self, content_type: ContentType, id: i16) -> Option<ContentRef> {
        Some(ContentRef::new(content_type, id))
    }

    fn block(&self, id: i16) -> Option<BlockRef> {
        Some(BlockRef::new(id, BlockKind::Other))
    }
}

impl WorldGrid for PassThroughRegistry {
    fn building(&self, pos: i32) -> Option<BuildingRef> {
        Some(BuildingRef::new(pos))
    }
}

/// Decode context backed by [`PassThroughRegistry`] with unbounded enum domains.
#[must_use]
pub fn pass_through_context() -> DecodeContext<'static> {
    DecodeContext::new(
        &PassThroughRegistry,
        &PassThroughRegistry,
        EnumDomains::unbounded(),
    )
}

/// One decoded object and where it sat in the stream.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectEntry {
    pub offset: usize,
    pub size: usize,
    pub tag: i8,
    pub tag_name: &'static str,
    pub value: Value,
}

/// Result of walking a stream.
///
/// Decoding stops at the first fatal error; everything before it is kept.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InspectReport {
    pub total_bytes: usize,
    pub objects: Vec<ObjectEntry>,
    pub error: Option<InspectError>,
}

/// A fatal decode error and the offset of the object that caused it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InspectError {
    pub offset: usize,
    pub message: String,
}

impl InspectReport {
    /// Bytes occupied per tag, largest first.
    #[must_use]
    pub fn bytes_by_tag(&self) -> Vec<(ObjectTag, usize, usize)> {
        let mut totals: Vec<(ObjectTag, usize, usize)> = Vec::new();
        for entry in &self.objects {
            let Ok(tag) = ObjectTag::parse(entry.tag) else {
                continue;
            };
            match totals.iter_mut().find(|(seen, _, _)| *seen == tag) {
                Some((_, count, bytes)) => {
                    *count += 1;
                    *bytes += entry.size;
                }
                None => totals.push((tag, 1, entry.size)),
            }
        }
        totals.sort_by(|a, b| b.2.cmp(&a.2).then_with(|| a.0.raw().cmp(&b.0.raw())));
        totals
    }
}

/// Walks `bytes` object by object.
#[must_use]
pub fn inspect_stream(bytes: &[u8], limits: &CodecLimits) -> InspectReport {
    let ctx = pass_through_context();
    let mut reader = ByteReader::new(bytes);
    let mut objects = Vec::new();
    let mut error = None;
    while !reader.is_empty() {
        let offset = reader.position();
        match read_object(&mut reader, &ctx, limits) {
            Ok(value) => {
                let tag = value.tag();
                objects.push(ObjectEntry {
                    offset,
                    size: reader.position() - offset,
                    tag: tag.raw(),
                    tag_name: tag.name(),
                    value,
                });
            }
            Err(err) => {
                tracing::warn!(offset, error = %err, "stream decode stopped");
                error = Some(InspectError {
                    offset,
                    message: err.to_string(),
                });
                break;
            }
        }
    }
    InspectReport {
        total_bytes: bytes.len(),
        objects,
        error,
    }
}

/// Decodes a whole stream. Unlike [`inspect_stream`], any error is fatal.
pub fn decode_stream(bytes: &[u8], limits: &CodecLimits) -> Result<Vec<Value>> {
    codec::decode_objects(bytes, &pass_through_context(), limits).context("decode object stream")
}

/// Parses a JSON array of objects and encodes it.
pub fn encode_json(json: &str) -> Result<Vec<u8>> {
    let values: Vec<Value> = serde_json::from_str(json).context("parse object json")?;
    codec::encode_objects(&values).context("encode object stream")
}

/// Formats one value on a single line.
#[must_use]
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Int(v) => v.to_string(),
        Value::Long(v) => format!("{v}L"),
        Value::Float(v) => format!("{v}f"),
        Value::Double(v) => format!("{v}d"),
        Value::Bool(v) => v.to_string(),
        Value::String(v) => format!("{v:?}"),
        Value::Content(content) => format_content(content),
        Value::TechNode(content) => format!("node({})", format_content(content)),
        Value::IntSeq(values) => format!("{values:?}"),
        Value::Point2(point) => format!("({}, {})", point.x, point.y),
        Value::PackedPoints(points) => {
            let parts: Vec<String> = points
                .iter()
                .map(|point| format!("({}, {})", point.x, point.y))
                .collect();
            format!("[{}]", parts.join(", "))
        }
        Value::Building(building) => {
            let tile = building.tile();
            format!("building@({}, {})", tile.x, tile.y)
        }
        Value::LogicAccess(access) => format!("logic_access#{}", access.ordinal()),
        Value::UnitCommand(command) => format!("unit_command#{}", command.ordinal()),
        Value::Bytes(bytes) => format!("{} bytes", bytes.len()),
        Value::Vec2(vec) => format!("<{}, {}>", vec.x, vec.y),
    }
}

fn format_content(content: &ContentRef) -> String {
    format!("{:?}:{}", content.content_type, content.id)
}

/// Renders decoded values as an indexed listing.
#[must_use]
pub fn format_decode_pretty(values: &[Value]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "objects: {}", values.len());
    for (idx, value) in values.iter().enumerate() {
        let _ = writeln!(
            out,
            "  [{idx}] {}: {}",
            value.tag().name(),
            format_value(value)
        );
    }
    out
}

/// Renders an inspect report with offsets and sizes.
#[must_use]
pub fn format_inspect_report(report: &InspectReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "total: {} bytes, {} objects",
        report.total_bytes,
        report.objects.len()
    );
    for entry in &report.objects {
        let _ = writeln!(
            out,
            "  @{:<6} {:>3} {:<13} {:>5} bytes  {}",
            entry.offset,
            entry.tag,
            entry.tag_name,
            entry.size,
            format_value(&entry.value)
        );
    }
    let by_tag = report.bytes_by_tag();
    if !by_tag.is_empty() {
        let _ = writeln!(out, "by tag:");
        for (tag, count, bytes) in by_tag {
            let _ = writeln!(out, "  {}: {count} objects, {bytes} bytes", tag.name());
        }
    }
    if let Some(error) = &report.error {
        let _ = writeln!(out, "error at @{}: {}", error.offset, error.message);
    }
    out
}

#[cfg(test)]
mod tests {
    use codec::{encode_objects, LogicAccess, Point2};

    use super::*;

    fn sample() -> Vec<Value> {
        vec![
            Value::Int(7),
            Value::from("core"),
            Value::Content(ContentRef::new(ContentType::Item, 3)),
            Value::PackedPoints(vec![Point2::new(1, -1)]),
            Value::LogicAccess(LogicAccess::new(2)),
        ]
    }

    #[test]
    fn inspect_records_offsets_and_sizes() {
        let bytes = encode_objects(&sample()).unwrap();
        let report = inspect_stream(&bytes, &CodecLimits::default());
        assert!(report.error.is_none());
        let layout: Vec<(usize, usize, i8)> = report
            .objects
            .iter()
            .map(|entry| (entry.offset, entry.size, entry.tag))
            .collect();
        assert_eq!(
            layout,
            vec![(0, 5, 1), (5, 8, 4), (13, 4, 5), (17, 6, 7), (23, 3, 13)]
        );
        assert_eq!(report.total_bytes, 26);
    }

    #[test]
    fn inspect_keeps_prefix_on_error() {
        let mut bytes = encode_objects(&[Value::Bool(true)]).unwrap();
        bytes.push(0x30);
        let report = inspect_stream(&bytes, &CodecLimits::default());
        assert_eq!(report.objects.len(), 1);
        let error = report.error.unwrap();
        assert_eq!(error.offset, 2);
        assert!(error.message.contains("48"));
    }

    #[test]
    fn pass_through_keeps_stale_ids() {
        let bytes = encode_objects(&[Value::Content(ContentRef::new(ContentType::Unit, 999))])
            .unwrap();
        let values = decode_stream(&bytes, &CodecLimits::default()).unwrap();
        assert_eq!(
            values,
            vec![Value::Content(ContentRef::new(ContentType::Unit, 999))]
        );
    }

    #[test]
    fn json_roundtrip() {
        let values = sample();
        let json = serde_json::to_string(&values).unwrap();
        let bytes = encode_json(&json).unwrap();
        assert_eq!(bytes, encode_objects(&values).unwrap());
        assert_eq!(decode_stream(&bytes, &CodecLimits::default()).unwrap(), values);
    }

    #[test]
    fn json_shape_is_kind_and_value() {
        let json = serde_json::to_value(Value::Int(3)).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "int", "value": 3}));
    }

    #[test]
    fn encode_json_rejects_garbage() {
        assert!(encode_json("{not json").is_err());
    }

    #[test]
    fn pretty_listing() {
        let text = format_decode_pretty(&[Value::Int(1), Value::Null]);
        assert_eq!(text, "objects: 2\n  [0] int: 1\n  [1] null: null\n");
    }

    #[test]
    fn bytes_by_tag_sorted_by_size() {
        let values = vec![Value::Bool(true), Value::Long(1), Value::Bool(false)];
        let bytes = encode_objects(&values).unwrap();
        let report = inspect_stream(&bytes, &CodecLimits::default());
        assert_eq!(
            report.bytes_by_tag(),
            vec![(ObjectTag::Long, 1, 9), (ObjectTag::Bool, 2, 4)]
        );
    }
}
