#![no_main]

use bytestream::ByteReader;
use codec::{
    read_building_seq, read_object, BlockKind, BlockRef, BuildingRef, CodecLimits, ContentRef,
    ContentRegistry, ContentType, DecodeContext, EnumDomains, WorldGrid,
};
use libfuzzer_sys::fuzz_target;

/// Resolves only even ids so both resolved and stale paths run.
struct EvenOnly;

impl ContentRegistry for EvenOnly {
    fn content(&self, content_type: ContentType, id: i16) -> Option<ContentRef> {
        (id % 2 == 0).then_some(ContentRef::new(content_type, id))
    }

    fn block(&self, id: i16) -> Option<BlockRef> {
        (id % 2 == 0).then_some(BlockRef::new(id, BlockKind::Floor))
    }
}

impl WorldGrid for EvenOnly {
    fn building(&self, pos: i32) -> Option<BuildingRef> {
        (pos % 2 == 0).then_some(BuildingRef::new(pos))
    }
}

fuzz_target!(|data: &[u8]| {
    let ctx = DecodeContext::new(&EvenOnly, &EvenOnly, EnumDomains::new(4, 8));
    let limits = CodecLimits::for_testing();

    let mut reader = ByteReader::new(data);
    while !reader.is_empty() {
        let before = reader.position();
        match read_object(&mut reader, &ctx, &limits) {
            Ok(_) => assert!(reader.position() > before),
            Err(_) => {
                assert_eq!(reader.position(), before);
                break;
            }
        }
    }

    let _ = read_building_seq(&mut ByteReader::new(data), &EvenOnly, &limits);
});
