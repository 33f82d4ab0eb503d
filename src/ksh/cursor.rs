//! Walking the ticks of a chart in order.

use super::{
    model::{Chart, block::Block, tick::Tick},
    time::KshTime,
};

/// A forward-only cursor over the ticks of a [`Chart`].
///
/// The cursor holds the chart by reference and an address by value, and looks up the block again on every step. It moves across the block boundaries, and becomes invalid after the last tick. An invalid cursor stays invalid, so create a new cursor to walk the chart again.
///
/// Blocks without any tick have no address to stop at, so the cursor passes over them.
///
/// ```
/// use ksh_rs::ksh::{default_config, parse_ksh, time::KshTime};
///
/// let chart = parse_ksh("--\r\n1000|00|--\r\n--\r\n0100|00|--\r\n0010|00|--\r\n--\r\n", default_config()).unwrap();
/// let mut cursor = chart.ticks();
/// let mut buttons = vec![];
/// while cursor.is_valid() {
///     buttons.push(cursor.tick().buttons.clone());
///     cursor.advance();
/// }
/// assert_eq!(buttons, ["1000", "0100", "0010"]);
/// ```
#[derive(Debug, Clone)]
pub struct TickCursor<'a> {
    chart: &'a Chart,
    time: KshTime,
}

impl<'a> TickCursor<'a> {
    /// Creates a cursor at `start`.
    ///
    /// If `start` is the first tick of an empty block, the cursor starts at the next tick after it. If `start` addresses no tick otherwise, the cursor is invalid.
    #[must_use]
    pub fn new(chart: &'a Chart, start: KshTime) -> Self {
        let mut cursor = Self { chart, time: start };
        if start.tick == 0 {
            cursor.skip_empty_blocks();
        }
        cursor
    }

    /// Returns whether the cursor is on a tick.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.chart.tick(self.time).is_some()
    }

    /// Returns the address of the cursor.
    #[must_use]
    pub const fn time(&self) -> KshTime {
        self.time
    }

    /// Returns the tick on the cursor, or `None` if the cursor is invalid.
    #[must_use]
    pub fn get(&self) -> Option<&'a Tick> {
        self.chart.tick(self.time)
    }

    /// Returns the tick on the cursor.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is invalid. Check [`TickCursor::is_valid`] before.
    #[must_use]
    pub fn tick(&self) -> &'a Tick {
        match self.get() {
            Some(tick) => tick,
            None => panic!("dereferenced an invalid tick cursor at {}", self.time),
        }
    }

    /// Returns the block containing the cursor, or `None` if the cursor is invalid.
    #[must_use]
    pub fn block(&self) -> Option<&'a Block> {
        self.is_valid().then(|| self.chart.block(self.time)).flatten()
    }

    /// Moves the cursor to the next tick, which may be in the next block.
    ///
    /// It does nothing if the cursor is invalid.
    pub fn advance(&mut self) {
        let Some(block) = self.block() else {
            return;
        };
        self.time.tick += 1;
        if self.time.tick >= block.tick_count() {
            self.time.tick = 0;
            self.time.block += 1;
            self.skip_empty_blocks();
        }
    }

    fn skip_empty_blocks(&mut self) {
        while self.chart.block(self.time).is_some_and(Block::is_empty) {
            self.time.block += 1;
        }
    }
}

impl<'a> Iterator for TickCursor<'a> {
    type Item = (KshTime, &'a Tick);

    fn next(&mut self) -> Option<Self::Item> {
        let item = (self.time, self.get()?);
        self.advance();
        Some(item)
    }
}
