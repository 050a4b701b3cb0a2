mod common;

use bytestream::{ByteReader, ByteWriter};
use codec::{
    decode_objects, encode_objects, read_enum, read_object, write_enum, BuildingRef, CodecLimits,
    ContentRef, ContentType, LogicAccess, Point2, UnitCommand, Value, Vec2,
};
use common::everything;
use proptest::prelude::*;

fn content_ref() -> impl Strategy<Value = ContentRef> {
    (0..ContentType::ALL.len(), 0i16..=i16::MAX)
        .prop_map(|(idx, id)| ContentRef::new(ContentType::ALL[idx], id))
}

fn point() -> impl Strategy<Value = Point2> {
    (any::<i16>(), any::<i16>()).prop_map(|(x, y)| Point2::new(i32::from(x), i32::from(y)))
}

fn value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<i32>().prop_map(Value::Int),
        any::<i64>().prop_map(Value::Long),
        (-1.0e6f32..1.0e6).prop_map(Value::Float),
        "[a-z0-9 ]{0,24}".prop_map(Value::String),
        content_ref().prop_map(Value::Content),
        prop::collection::vec(any::<i32>(), 0..16).prop_map(Value::IntSeq),
        (any::<i32>(), any::<i32>()).prop_map(|(x, y)| Value::Point2(Point2::new(x, y))),
        prop::collection::vec(point(), 0..16).prop_map(Value::PackedPoints),
        content_ref().prop_map(Value::TechNode),
        any::<bool>().prop_map(Value::Bool),
        (-1.0e12f64..1.0e12).prop_map(Value::Double),
        // -1 is reserved for an absent building.
        (0..=i32::MAX).prop_map(|pos| Value::Building(BuildingRef::new(pos))),
        (0u16..4).prop_map(|idx| Value::LogicAccess(LogicAccess::new(idx))),
        prop::collection::vec(any::<u8>(), 0..32).prop_map(Value::Bytes),
        (0u8..8).prop_map(|idx| Value::UnitCommand(UnitCommand::new(idx))),
        (-1.0e6f32..1.0e6, -1.0e6f32..1.0e6).prop_map(|(x, y)| Value::Vec2(Vec2::new(x, y))),
    ]
}

proptest! {
    #[test]
    fn objects_roundtrip(values in prop::collection::vec(value(), 0..24)) {
        let bytes = encode_objects(&values).unwrap();
        let decoded = decode_objects(&bytes, &everything(), &CodecLimits::default()).unwrap();
        prop_assert_eq!(decoded, values);
    }

    #[test]
    fn enum_read_always_lands_in_domain(raw in any::<i16>(), len in 1usize..64) {
        let domain: Vec<usize> = (0..len).collect();
        let mut writer = ByteWriter::new();
        writer.write_i16(raw);
        let bytes = writer.finish();
        let value = *read_enum(&mut ByteReader::new(&bytes), &domain).unwrap();
        prop_assert!(value < len);
        prop_assert_eq!(value, ((i32::from(raw) % len as i32 + len as i32) % len as i32) as usize);
    }

    #[test]
    fn enum_ordinals_in_domain_are_identity(len in 1usize..64, pick in any::<prop::sample::Index>()) {
        let domain: Vec<usize> = (0..len).collect();
        let ordinal = pick.index(len);
        let mut writer = ByteWriter::new();
        write_enum(&mut writer, ordinal).unwrap();
        let bytes = writer.finish();
        prop_assert_eq!(*read_enum(&mut ByteReader::new(&bytes), &domain).unwrap(), ordinal);
    }

    #[test]
    fn read_object_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let mut reader = ByteReader::new(&bytes);
        let ctx = everything();
        let limits = CodecLimits::for_testing();
        while !reader.is_empty() {
            let before = reader.position();
            match read_object(&mut reader, &ctx, &limits) {
                Ok(_) => prop_assert!(reader.position() > before),
                Err(_) => {
                    prop_assert_eq!(reader.position(), before);
                    break;
                }
            }
        }
    }
}
