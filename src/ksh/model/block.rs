//! A block, the measure of the chart.

use super::{metadata::Settings, tick::Tick};

/// A block of ticks between two separators.
///
/// The number of ticks is the resolution of the block, and it may differ from block to block.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Block {
    pub(crate) ticks: Vec<Tick>,
    pub(crate) settings: Settings,
}

impl Block {
    /// Returns the ticks in order.
    #[must_use]
    pub fn ticks(&self) -> &[Tick] {
        &self.ticks
    }

    /// Returns the tick at the index.
    #[must_use]
    pub fn tick(&self, index: usize) -> Option<&Tick> {
        self.ticks.get(index)
    }

    /// Returns the number of the ticks.
    #[must_use]
    pub fn tick_count(&self) -> usize {
        self.ticks.len()
    }

    /// Returns whether the block has no tick.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    /// Returns the `key=value` lines which followed the last note line of the block.
    ///
    /// Only the lines written in this block are kept here, so an empty block after it has no settings. These settings are not committed to any tick of this block. They stay pending and are also attached to the first tick of the next block.
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }
}
