use bytestream::{ByteError, ByteReader, ByteWriter};

#[test]
fn writer_roundtrip_mixed() {
    let mut writer = ByteWriter::new();
    writer.write_u8(4);
    writer.write_u16(0xBEEF);
    writer.write_f32(-2.5);
    writer.write_utf("core-shard").unwrap();
    let bytes = writer.finish();

    let mut reader = ByteReader::new(&bytes);
    assert_eq!(reader.read_u8().unwrap(), 4);
    assert_eq!(reader.read_u16().unwrap(), 0xBEEF);
    assert_eq!(reader.read_f32().unwrap(), -2.5);
    assert_eq!(reader.read_utf().unwrap(), "core-shard");
    assert!(reader.is_empty());
}

#[test]
fn network_order_layout() {
    // i16 -1, i32 10, then "ab" with its u16 length.
    let expected = [0xFF, 0xFF, 0x00, 0x00, 0x00, 0x0A, 0x00, 0x02, b'a', b'b'];

    let mut writer = ByteWriter::new();
    writer.write_i16(-1);
    writer.write_i32(10);
    writer.write_utf("ab").unwrap();
    assert_eq!(writer.as_slice(), &expected);
}

#[test]
fn truncated_string_body_reports_eof() {
    let mut reader = ByteReader::new(&[0x00, 0x05, b'a']);
    let err = reader.read_utf().unwrap_err();
    assert_eq!(
        err,
        ByteError::UnexpectedEof {
            requested: 5,
            available: 1
        }
    );
}
