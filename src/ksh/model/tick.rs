//! A tick, the state of the buttons and lasers at one instant.

use super::metadata::Settings;

/// One tick of a block, parsed from a note line such as `1000|02|0o`.
///
/// The fields are stored as written. The buttons and FX buttons are `'0'` for nothing, `'1'` for a chip and `'2'` for a hold, but only the width is checked when parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick {
    /// The BT-A to BT-D buttons, 4 characters.
    pub buttons: String,
    /// The FX-L and FX-R buttons, 2 characters.
    pub fx: String,
    /// The left and right lasers, 2 characters. See [`crate::ksh::mapper`] for the alphabet.
    pub laser: String,
    /// The characters after the lasers, such as lane spin commands. Usually empty.
    pub extra: String,
    /// The `key=value` lines met before this note line.
    pub settings: Settings,
}

impl Default for Tick {
    fn default() -> Self {
        Self {
            buttons: "0000".into(),
            fx: "00".into(),
            laser: "--".into(),
            extra: String::new(),
            settings: Settings::default(),
        }
    }
}

impl Tick {
    /// Resets the tick into the default, no buttons and no lasers.
    pub fn clear(&mut self) {
        self.buttons.replace_range(.., "0000");
        self.fx.replace_range(.., "00");
        self.laser.replace_range(.., "--");
        self.extra.clear();
        self.settings.clear();
    }

    /// Returns the button state of the lane, from 0 (BT-A) to 3 (BT-D).
    #[must_use]
    pub fn button(&self, lane: usize) -> Option<char> {
        self.buttons.chars().nth(lane)
    }

    /// Returns the FX button state of the side, 0 for left and 1 for right.
    #[must_use]
    pub fn fx_button(&self, side: usize) -> Option<char> {
        self.fx.chars().nth(side)
    }

    /// Returns the laser character of the side, 0 for left and 1 for right.
    #[must_use]
    pub fn laser_char(&self, side: usize) -> Option<char> {
        self.laser.chars().nth(side)
    }
}

/// Formats as `buttons|fx|laser`. The extra characters are not included.
impl std::fmt::Display for Tick {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}|{}|{}", self.buttons, self.fx, self.laser)
    }
}
