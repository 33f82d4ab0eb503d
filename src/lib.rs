//! The KSH format parser.
//!
//! KSH (`.ksh`) is the chart format of K-Shoot MANIA. A chart is a text document which consists of a header section of `key=value` lines, followed by a body of blocks separated by `--` lines. Each block holds note lines such as `1000|02|0o`, where a line is one tick of the block.
//!
//! # Usage
//!
//! ```
//! use ksh_rs::ksh::{default_config, parse_ksh};
//!
//! let source = "title=Test\r\nt=120\r\n--\r\n1000|00|--\r\n0000|00|--\r\n--\r\n";
//! let chart = parse_ksh(source, default_config()).unwrap();
//! assert_eq!(chart.metadata().get("title"), Some("Test"));
//! assert_eq!(chart.block_count(), 1);
//! assert_eq!(chart.blocks()[0].tick_count(), 2);
//! ```
//!
//! Parsing stops at the first malformed line, and the error reports the line number. Once parsed, a [`ksh::model::Chart`] is read-only and can be walked with [`ksh::cursor::TickCursor`].
//!
//! # Features
//!
//! - `diagnostics` (default): renders parse errors with [`ariadne`](https://docs.rs/ariadne).
//! - `serde`: derives `Serialize`/`Deserialize` for the chart model.

#[cfg(feature = "diagnostics")]
pub mod diagnostics;
pub mod ksh;
