mod common;

use bytestream::{ByteReader, ByteWriter};
use codec::{
    decode_objects, encode_objects, read_building_seq, read_enum, read_floor, read_object,
    read_ore, read_static_wall, read_team, read_unit_type, write_block, write_building_seq,
    write_enum, write_object, write_team, write_unit_type, BlockKind, BuildingRef, CodecError,
    CodecLimits, ContentRef, ContentRegistry, ContentType, DecodeContext, LogicAccess, ObjectTag,
    Point2, Team, UnitCommand, Value, Vec2,
};
use common::{everything, MemoryContent, MemoryGrid, DOMAINS};

fn one_of_each() -> Vec<Value> {
    vec![
        Value::Vec2(Vec2::new(3.5, -1.25)),
        Value::Null,
        Value::Int(i32::MIN),
        Value::Long(i64::MAX),
        Value::Float(0.1),
        Value::from("router"),
        Value::Content(ContentRef::new(ContentType::Item, 12)),
        Value::IntSeq(vec![1, 2, 3]),
        Value::Point2(Point2::new(-70_000, 70_000)),
        Value::PackedPoints(vec![Point2::new(1, 2), Point2::new(-1, -2)]),
        Value::TechNode(ContentRef::new(ContentType::Block, 40)),
        Value::Bool(false),
        Value::Double(-2.5e300),
        Value::Building(BuildingRef::at(7, 9)),
        Value::LogicAccess(LogicAccess::new(3)),
        Value::Bytes(vec![0, 1, 2, 255]),
        Value::UnitCommand(UnitCommand::new(7)),
    ]
}

#[test]
fn every_tag_roundtrips() {
    let values = one_of_each();
    let tags: Vec<ObjectTag> = values.iter().map(Value::tag).collect();
    assert_eq!(tags, ObjectTag::ALL.to_vec());

    let bytes = encode_objects(&values).unwrap();
    let decoded = decode_objects(&bytes, &everything(), &CodecLimits::default()).unwrap();
    assert_eq!(decoded, values);
}

#[test]
fn team_scenario() {
    let mut writer = ByteWriter::new();
    write_team(&mut writer, Some(Team::new(3)));
    write_team(&mut writer, None);
    let bytes = writer.finish();
    assert_eq!(bytes, vec![3, 0xFF]);

    let mut reader = ByteReader::new(&bytes);
    assert_eq!(read_team(&mut reader).unwrap(), Some(Team::new(3)));
    assert_eq!(read_team(&mut reader).unwrap(), None);
    assert!(reader.is_empty());
}

#[test]
fn enum_scenario_shrunk_domain() {
    let five = ["a", "b", "c", "d", "e"];
    let mut writer = ByteWriter::new();
    write_enum(&mut writer, 2).unwrap();
    let bytes = writer.finish();
    assert_eq!(bytes, vec![0, 2]);

    assert_eq!(*read_enum(&mut ByteReader::new(&bytes), &five).unwrap(), "c");
    assert_eq!(*read_enum(&mut ByteReader::new(&bytes), &five[..2]).unwrap(), "a");
}

#[test]
fn building_list_scenario() {
    let grid = MemoryGrid::default().with(10).with(20);
    let mut writer = ByteWriter::new();
    write_building_seq(
        &mut writer,
        &[Some(BuildingRef::new(10)), Some(BuildingRef::new(20))],
    )
    .unwrap();
    let bytes = writer.finish();
    assert_eq!(bytes, vec![0, 0, 0, 2, 0, 0, 0, 10, 0, 0, 0, 20]);

    let decoded =
        read_building_seq(&mut ByteReader::new(&bytes), &grid, &CodecLimits::default()).unwrap();
    assert_eq!(
        decoded,
        vec![Some(BuildingRef::new(10)), Some(BuildingRef::new(20))]
    );
}

#[test]
fn stale_references_decode_to_null() {
    let mut content = MemoryContent::default()
        .with(ContentType::Item, 1)
        .with(ContentType::Block, 40);
    let mut grid = MemoryGrid::default().with(BuildingRef::at(2, 2).pos);
    let values = vec![
        Value::Content(ContentRef::new(ContentType::Item, 1)),
        Value::TechNode(ContentRef::new(ContentType::Block, 40)),
        Value::Building(BuildingRef::at(2, 2)),
        Value::Int(5),
    ];
    let bytes = encode_objects(&values).unwrap();

    let limits = CodecLimits::default();
    let ctx = DecodeContext::new(&content, &grid, DOMAINS);
    assert_eq!(decode_objects(&bytes, &ctx, &limits).unwrap(), values);

    content.remove(ContentType::Item, 1);
    content.remove(ContentType::Block, 40);
    grid.demolish(BuildingRef::at(2, 2).pos);

    let ctx = DecodeContext::new(&content, &grid, DOMAINS);
    let decoded = decode_objects(&bytes, &ctx, &limits).unwrap();
    assert_eq!(
        decoded,
        vec![Value::Null, Value::Null, Value::Null, Value::Int(5)]
    );
}

#[test]
fn out_of_domain_indices_decode_to_null() {
    let bytes = encode_objects(&[
        Value::LogicAccess(LogicAccess::new(9)),
        Value::UnitCommand(UnitCommand::new(100)),
    ])
    .unwrap();
    let decoded = decode_objects(&bytes, &everything(), &CodecLimits::default()).unwrap();
    assert_eq!(decoded, vec![Value::Null, Value::Null]);
}

#[test]
fn negative_indices_decode_to_null() {
    // Tag 13 / -1, then tag 15 / -1.
    let bytes = [13, 0xFF, 0xFF, 15, 0xFF];
    let decoded = decode_objects(&bytes, &everything(), &CodecLimits::default()).unwrap();
    assert_eq!(decoded, vec![Value::Null, Value::Null]);
}

#[test]
fn block_sub_kinds_are_checked() {
    let content = MemoryContent::default()
        .with_block(1, BlockKind::StaticWall)
        .with_block(2, BlockKind::Ore)
        .with_block(3, BlockKind::Floor);

    let mut writer = ByteWriter::new();
    for id in [1, 2, 3] {
        write_block(&mut writer, content.block(id).as_ref());
    }
    let bytes = writer.finish();

    let mut reader = ByteReader::new(&bytes);
    assert_eq!(
        read_static_wall(&mut reader, &content).unwrap().map(|b| b.id),
        Some(1)
    );
    assert_eq!(read_ore(&mut reader, &content).unwrap().map(|b| b.id), Some(2));
    assert_eq!(read_floor(&mut reader, &content).unwrap().map(|b| b.id), Some(3));

    // Same bytes read against the wrong sub-kinds.
    let mut reader = ByteReader::new(&bytes);
    assert_eq!(read_floor(&mut reader, &content).unwrap(), None);
    assert_eq!(read_static_wall(&mut reader, &content).unwrap(), None);
    assert_eq!(read_ore(&mut reader, &content).unwrap(), None);
}

#[test]
fn unit_type_resolves_in_unit_category() {
    let content = MemoryContent::default().with(ContentType::Unit, 4);
    let mut writer = ByteWriter::new();
    write_unit_type(&mut writer, Some(&ContentRef::new(ContentType::Unit, 4)));
    write_unit_type(&mut writer, None);
    write_unit_type(&mut writer, Some(&ContentRef::new(ContentType::Unit, 5)));
    let bytes = writer.finish();
    assert_eq!(bytes, vec![0, 4, 0xFF, 0xFF, 0, 5]);

    let mut reader = ByteReader::new(&bytes);
    assert_eq!(
        read_unit_type(&mut reader, &content).unwrap(),
        Some(ContentRef::new(ContentType::Unit, 4))
    );
    assert_eq!(read_unit_type(&mut reader, &content).unwrap(), None);
    assert_eq!(read_unit_type(&mut reader, &content).unwrap(), None);
}

#[test]
fn unknown_tag_leaves_stream_untouched() {
    let mut writer = ByteWriter::new();
    write_object(&mut writer, &Value::Int(1)).unwrap();
    let mut bytes = writer.finish();
    bytes.push(0x42);
    bytes.extend_from_slice(&[0, 0, 0, 0]);

    let ctx = everything();
    let limits = CodecLimits::default();
    let mut reader = ByteReader::new(&bytes);
    assert_eq!(read_object(&mut reader, &ctx, &limits).unwrap(), Value::Int(1));
    let before = reader.position();
    let err = read_object(&mut reader, &ctx, &limits).unwrap_err();
    assert_eq!(
        err,
        CodecError::Wire(wire::DecodeError::UnknownObjectTag { tag: 0x42 })
    );
    assert_eq!(reader.position(), before);
}

#[test]
fn stream_error_aborts_whole_decode() {
    let bytes = [1, 0, 0, 0, 1, 99];
    let err = decode_objects(&bytes, &everything(), &CodecLimits::default()).unwrap_err();
    assert!(matches!(
        err,
        CodecError::Wire(wire::DecodeError::UnknownObjectTag { tag: 99 })
    ));
}

#[test]
fn limits_bound_decoded_sequences() {
    let bytes = encode_objects(&[Value::IntSeq(vec![0; 100])]).unwrap();
    let err = decode_objects(&bytes, &everything(), &CodecLimits::for_testing()).unwrap_err();
    assert!(matches!(err, CodecError::LimitsExceeded { actual: 100, .. }));
    assert!(decode_objects(&bytes, &everything(), &CodecLimits::default()).is_ok());
}

#[test]
fn negative_int_seq_length_decodes_empty() {
    let bytes = [6, 0xFF, 0xFF, 10, 1];
    let decoded = decode_objects(&bytes, &everything(), &CodecLimits::default()).unwrap();
    assert_eq!(decoded, vec![Value::IntSeq(Vec::new()), Value::Bool(true)]);
}

#[test]
fn default_limits_accept_largest_encodable_values() {
    let values = vec![
        Value::IntSeq(vec![7; i16::MAX as usize]),
        Value::PackedPoints(vec![Point2::new(3, -3); i8::MAX as usize]),
        Value::Bytes(vec![0xAB; 2 * 1024 * 1024]),
        Value::String("x".repeat(usize::from(u16::MAX))),
    ];
    let bytes = encode_objects(&values).unwrap();
    let decoded = decode_objects(&bytes, &everything(), &CodecLimits::default()).unwrap();
    assert_eq!(decoded, values);
}

#[test]
fn java_modified_utf8_string_decodes() {
    let bytes = [4, 1, 0, 3, b'a', 0xC0, 0x80];
    let decoded = decode_objects(&bytes, &everything(), &CodecLimits::default()).unwrap();
    assert_eq!(decoded, vec![Value::from("a\0")]);
    assert_eq!(encode_objects(&decoded).unwrap(), bytes.to_vec());
}

#[test]
fn supplementary_characters_roundtrip() {
    let values = vec![Value::from("ore \u{1F48E}")];
    let bytes = encode_objects(&values).unwrap();
    // "ore " plus a six-byte surrogate pair.
    assert_eq!(&bytes[..4], &[4, 1, 0, 10]);
    let decoded = decode_objects(&bytes, &everything(), &CodecLimits::default()).unwrap();
    assert_eq!(decoded, values);
}
