//! Chart data model parsed from KSH file.

pub mod block;
pub mod metadata;
pub mod tick;

use super::{cursor::TickCursor, time::KshTime};

use self::{block::Block, metadata::Metadata, tick::Tick};

/// A chart data aggregate of KSH format.
///
/// Block indices match the positions in [`Chart::blocks`], and tick indices match the positions in [`Block::ticks`]. The chart is built only by the parser, and read-only after that.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chart {
    pub(crate) metadata: Metadata,
    pub(crate) blocks: Vec<Block>,
}

impl Chart {
    /// Returns the header of the chart.
    #[must_use]
    pub const fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Returns the sealed blocks in order.
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Returns the number of the blocks.
    #[must_use]
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Returns the number of the ticks in all blocks.
    #[must_use]
    pub fn total_tick_count(&self) -> usize {
        self.blocks.iter().map(Block::tick_count).sum()
    }

    /// Returns the block addressed by `time`, ignoring its tick index.
    #[must_use]
    pub fn block(&self, time: KshTime) -> Option<&Block> {
        if !time.is_valid() {
            return None;
        }
        self.blocks.get(time.block)
    }

    /// Returns the tick addressed by `time`.
    #[must_use]
    pub fn tick(&self, time: KshTime) -> Option<&Tick> {
        self.block(time)?.tick(time.tick)
    }

    /// Returns a cursor from the first tick of the chart.
    #[must_use]
    pub fn ticks(&self) -> TickCursor<'_> {
        TickCursor::new(self, KshTime::START)
    }
}
