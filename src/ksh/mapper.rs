//! Conversions from chart addresses and laser characters into scalar positions.
//!
//! A laser character is one of:
//!
//! - `'0'` to `'o'` (ASCII): the position from left to right, `0.0` to `1.0`.
//! - [`LASER_NONE`] (`'-'`): no laser at the tick.
//! - [`LASER_INTERPOLATE`] (`':'`): the laser moves linearly from the previous point to the next.
//!
//! [`laser_char_to_f32`] decodes only the position alphabet, so check the markers before calling it, or use [`LaserPoint::from_char`].

use super::{model::Chart, time::KshTime};

/// The laser character meaning no laser.
pub const LASER_NONE: char = '-';
/// The laser character meaning interpolation between the previous and the next points.
pub const LASER_INTERPOLATE: char = ':';

const LASER_START: u32 = '0' as u32;
const LASER_END: u32 = 'o' as u32;
const LASER_RANGE: u32 = LASER_END - LASER_START;

/// Converts the address into the position in blocks, such as `1.5` for the middle of the second block.
///
/// The fraction is divided by the tick count of the addressed block, so blocks of different resolutions have the same length. Returns `-1.0` if the block is out of the chart. A block without ticks maps to its start.
#[must_use]
pub fn time_to_f32(time: KshTime, chart: &Chart) -> f32 {
    let Some(block) = chart.block(time) else {
        return -1.0;
    };
    if block.is_empty() {
        return time.block as f32;
    }
    time.block as f32 + time.tick as f32 / block.tick_count() as f32
}

/// Decodes the laser position character into `0.0..=1.0`, linearly from `'0'` to `'o'`.
///
/// The markers [`LASER_NONE`] and [`LASER_INTERPOLATE`] are not handled, and characters out of the alphabet give values out of the range.
#[must_use]
pub fn laser_char_to_f32(c: char) -> f32 {
    (c as u32 as f32 - LASER_START as f32) / LASER_RANGE as f32
}

/// A laser character classified with its markers.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LaserPoint {
    /// [`LASER_NONE`], no laser.
    None,
    /// [`LASER_INTERPOLATE`], on the line between the neighbor points.
    Interpolate,
    /// A point at the position, `0.0` for the left end and `1.0` for the right end.
    Position(f32),
}

impl LaserPoint {
    /// Classifies the laser character. Returns `None` if it is out of the alphabet.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            LASER_NONE => Some(Self::None),
            LASER_INTERPOLATE => Some(Self::Interpolate),
            '0'..='o' => Some(Self::Position(laser_char_to_f32(c))),
            _ => None,
        }
    }
}
