//! Definitions of time in KSH.

/// An address of a tick on the chart, the pair of the block index and the tick index in the block.
///
/// The default value is [`KshTime::INVALID`], which addresses nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KshTime {
    /// The block, or measure, where the tick is in. Starts with 0.
    pub block: usize,
    /// The tick index in the block. Starts with 0.
    pub tick: usize,
}

impl KshTime {
    /// The address which addresses nothing.
    pub const INVALID: Self = Self {
        block: usize::MAX,
        tick: usize::MAX,
    };

    /// The address of the first tick of the chart.
    pub const START: Self = Self { block: 0, tick: 0 };

    /// Create a new time.
    #[must_use]
    pub const fn new(block: usize, tick: usize) -> Self {
        Self { block, tick }
    }

    /// Returns whether the address is not [`KshTime::INVALID`].
    ///
    /// It does not check whether the address is in some chart.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.block != usize::MAX
    }
}

impl Default for KshTime {
    fn default() -> Self {
        Self::INVALID
    }
}

impl std::fmt::Display for KshTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_valid() {
            write!(f, "{}:{}", self.block, self.tick)
        } else {
            write!(f, "invalid")
        }
    }
}

#[test]
fn test_validity() {
    assert!(!KshTime::default().is_valid());
    assert!(KshTime::START.is_valid());
    assert!(KshTime::new(3, 15).is_valid());
    assert!(KshTime::new(0, 0) < KshTime::new(0, 1));
    assert!(KshTime::new(0, 47) < KshTime::new(1, 0));
    assert_eq!(KshTime::new(2, 4).to_string(), "2:4");
    assert_eq!(KshTime::INVALID.to_string(), "invalid");
}
