//! In-memory registries shared by the integration tests.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};

use codec::{
    BlockKind, BlockRef, BuildingRef, ContentRef, ContentRegistry, ContentType, DecodeContext,
    EnumDomains, WorldGrid,
};

#[derive(Debug, Default)]
pub struct MemoryContent {
    content: HashSet<(ContentType, i16)>,
    blocks: HashMap<i16, BlockKind>,
}

impl MemoryContent {
    pub fn with(mut self, content_type: ContentType, id: i16) -> Self {
        self.content.insert((content_type, id));
        self
    }

    pub fn with_block(mut self, id: i16, kind: BlockKind) -> Self {
        self.blocks.insert(id, kind);
        self.content.insert((ContentType::Block, id));
        self
    }

    pub fn remove(&mut self, content_type: ContentType, id: i16) {
        self.content.remove(&(content_type, id));
        if content_type == ContentType::Block {
            self.blocks.remove(&id);
        }
    }
}

impl ContentRegistry for MemoryContent {
    fn content(&self, content_type: ContentType, id: i16) -> Option<ContentRef> {
        self.content
            .contains(&(content_type, id))
            .then_some(ContentRef::new(content_type, id))
    }

    fn block(&self, id: i16) -> Option<BlockRef> {
        self.blocks.get(&id).map(|kind| BlockRef::new(id, *kind))
    }
}

#[derive(Debug, Default)]
pub struct MemoryGrid {
    buildings: HashSet<i32>,
}

impl MemoryGrid {
    pub fn with(mut self, pos: i32) -> Self {
        self.buildings.insert(pos);
        self
    }

    pub fn demolish(&mut self, pos: i32) {
        self.buildings.remove(&pos);
    }
}

impl WorldGrid for MemoryGrid {
    fn building(&self, pos: i32) -> Option<BuildingRef> {
        self.buildings.contains(&pos).then_some(BuildingRef::new(pos))
    }
}

/// A registry that resolves every id it is asked about.
#[derive(Debug, Default, Clone, Copy)]
pub struct Everything;

impl ContentRegistry for Everything {
    fn content(&self, content_type: ContentType, id: i16) -> Option<ContentRef> {
        Some(ContentRef::new(content_type, id))
    }

    fn block(&self, id: i16) -> Option<BlockRef> {
        Some(BlockRef::new(id, BlockKind::Other))
    }
}

impl WorldGrid for Everything {
    fn building(&self, pos: i32) -> Option<BuildingRef> {
        Some(BuildingRef::new(pos))
    }
}

pub const DOMAINS: EnumDomains = EnumDomains::new(4, 8);

pub fn everything() -> DecodeContext<'static> {
    DecodeContext::new(&Everything, &Everything, DOMAINS)
}
