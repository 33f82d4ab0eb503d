//! Prelude module for the KSH crate.
//!
//! This module re-exports all public types from the KSH module for convenient access.
//! You can use `use ksh_rs::ksh::prelude::*;` to import all KSH types at once.

// Re-export diagnostics when the feature is enabled
#[cfg(feature = "diagnostics")]
pub use crate::diagnostics::{SimpleSource, ToAriadne, collect_ksh_report, emit_ksh_error};

pub use super::{
    KshError, ParseConfig, SEPARATOR, UTF8_BOM,
    cursor::TickCursor,
    default_config,
    mapper::{LASER_INTERPOLATE, LASER_NONE, LaserPoint, laser_char_to_f32, time_to_f32},
    mixin::{SourceRangeMixin, SourceRangeMixinExt},
    model::{
        Chart,
        block::Block,
        metadata::{Metadata, Settings},
        tick::Tick,
    },
    parse::{ParseError, ParseErrorWithRange},
    parse_ksh, parse_ksh_bytes, parse_ksh_reader,
    time::KshTime,
};
