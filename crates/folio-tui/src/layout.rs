//! Vertical page layout in rows

use folio_core::content::SectionId;
use folio_core::viewport::SectionBounds;

/// A stacked block of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    Section(SectionId),
    Footer,
}

impl Block {
    /// Page order
    pub const ALL: [Block; 7] = [
        Block::Section(SectionId::Hero),
        Block::Section(SectionId::About),
        Block::Section(SectionId::Experience),
        Block::Section(SectionId::Skills),
        Block::Section(SectionId::Projects),
        Block::Section(SectionId::Contact),
        Block::Footer,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub block: Block,
    pub top: u16,
    pub height: u16,
}

impl Slot {
    pub fn bottom(&self) -> u16 {
        self.top.saturating_add(self.height)
    }
}

/// Where each block sits for the current width
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLayout {
    slots: Vec<Slot>,
    total_height: u16,
}

impl PageLayout {
    /// Stack blocks with the given heights, in order
    pub fn stack(heights: impl IntoIterator<Item = (Block, u16)>) -> Self {
        let mut top = 0u16;
        let slots = heights
            .into_iter()
            .map(|(block, height)| {
                let slot = Slot { block, top, height };
                top = top.saturating_add(height);
                slot
            })
            .collect();
        Self {
            slots,
            total_height: top,
        }
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn total_height(&self) -> u16 {
        self.total_height
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slot(&self, block: Block) -> Option<&Slot> {
        self.slots.iter().find(|s| s.block == block)
    }

    pub fn top_of(&self, id: SectionId) -> Option<u16> {
        self.slot(Block::Section(id)).map(|s| s.top)
    }

    /// Viewport-relative boxes of the sections at a scroll offset
    pub fn bounds(&self, offset: u16) -> Vec<SectionBounds> {
        self.slots
            .iter()
            .filter_map(|slot| match slot.block {
                Block::Section(id) => Some(SectionBounds::at(id, slot.top, slot.height, offset)),
                Block::Footer => None,
            })
            .collect()
    }
}
