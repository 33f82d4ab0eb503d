//! The parser module of KSH(.ksh) file.
//!
//! This module consists of two phases: the header phase and the body phase.
//!
//! `parse` module provides the line-by-line reader which builds a [`model::Chart`] from the source text. The header phase collects `key=value` lines into [`model::Metadata`], and the body phase collects note lines into [`model::Tick`]s grouped by [`model::Block`]s.
//!
//! `time` module provides the address of a tick as [`time::KshTime`], `cursor` walks the ticks in order, and `mapper` converts addresses and laser characters into scalar positions.
//!
//! In detail, our policies are:
//!
//! - Support only UTF-8, with or without the byte order mark.
//! - Do not support editing KSH source text, or writing it back.
//! - Do not interpret musical timing (BPM, seconds). Blocks and ticks are the only time unit.
//! - Stop at the first malformed line. There is no recovery and no partially parsed chart.

pub mod cursor;
pub mod mapper;
pub mod mixin;
pub mod model;
pub mod parse;
pub mod prelude;
pub mod time;

use std::io::Read;

use thiserror::Error;

use self::{
    model::Chart,
    parse::{ParseErrorWithRange, parse_source},
};

/// The byte order mark of UTF-8, which may lead the source.
pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// The line which closes the header and delimits the blocks.
pub const SEPARATOR: &str = "--";

/// Options of parsing KSH.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[must_use]
pub struct ParseConfig {
    metadata_only: bool,
}

impl ParseConfig {
    /// Sets whether parsing stops after the header section.
    ///
    /// When enabled, the parsed [`Chart`] has the metadata and no blocks. It is useful for a song selection which needs only the title, artist and so on.
    pub const fn metadata_only(mut self, metadata_only: bool) -> Self {
        self.metadata_only = metadata_only;
        self
    }

    /// Returns whether parsing stops after the header section.
    #[must_use]
    pub const fn is_metadata_only(&self) -> bool {
        self.metadata_only
    }
}

/// Returns the default config, which parses the whole chart.
pub fn default_config() -> ParseConfig {
    ParseConfig::default()
}

/// An error occurred when reading a KSH file.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum KshError {
    /// Failed to read the input stream.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    /// The input was not UTF-8 text.
    #[error("encoding: {0}")]
    Encoding(#[from] std::str::Utf8Error),
    /// The text was not a valid KSH chart.
    #[error("parse: {0}")]
    Parse(#[from] ParseErrorWithRange),
}

/// Parses a KSH chart from source text.
///
/// A leading byte order mark (`U+FEFF`) is skipped.
///
/// # Errors
///
/// Returns the first malformed line as [`ParseErrorWithRange`]. The position of the error is relative to `source`.
///
/// # Example
///
/// ```
/// use ksh_rs::ksh::{default_config, parse_ksh, parse::ParseError};
///
/// let err = parse_ksh("title=Bad\r\n--\r\n111|00|--\r\n--\r\n", default_config()).unwrap_err();
/// assert!(matches!(err.content(), ParseError::InvalidButtons { line: 3, .. }));
/// ```
pub fn parse_ksh(source: &str, config: ParseConfig) -> Result<Chart, ParseErrorWithRange> {
    let bom_len = if source.starts_with('\u{feff}') {
        '\u{feff}'.len_utf8()
    } else {
        0
    };
    parse_source(source, bom_len, config)
}

/// Parses a KSH chart from raw bytes.
///
/// The UTF-8 byte order mark is consumed if the first 3 bytes match it, otherwise the bytes are read from the beginning.
///
/// # Errors
///
/// Returns [`KshError::Encoding`] if the bytes are not UTF-8, or [`KshError::Parse`] on the first malformed line.
pub fn parse_ksh_bytes(bytes: &[u8], config: ParseConfig) -> Result<Chart, KshError> {
    let body = bytes.strip_prefix(&UTF8_BOM).unwrap_or(bytes);
    let source = std::str::from_utf8(body)?;
    Ok(parse_source(source, 0, config)?)
}

/// Reads the whole stream and parses it as a KSH chart.
///
/// # Errors
///
/// Returns [`KshError::Io`] if reading failed, otherwise the same errors as [`parse_ksh_bytes`].
pub fn parse_ksh_reader(mut reader: impl Read, config: ParseConfig) -> Result<Chart, KshError> {
    let mut bytes = vec![];
    reader.read_to_end(&mut bytes)?;
    parse_ksh_bytes(&bytes, config)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const SRC: &str = "title=Hoge\r\nartist=Foo\r\n--\r\n1000|00|0o\r\n--\r\n";

    #[test]
    fn bom_is_skipped() {
        let mut with_bom = UTF8_BOM.to_vec();
        with_bom.extend_from_slice(SRC.as_bytes());

        let plain = parse_ksh_bytes(SRC.as_bytes(), default_config()).unwrap();
        let bom = parse_ksh_bytes(&with_bom, default_config()).unwrap();
        assert_eq!(plain, bom);

        let bom_str = format!("\u{feff}{SRC}");
        assert_eq!(parse_ksh(&bom_str, default_config()).unwrap(), plain);
    }

    #[test]
    fn partial_bom_is_kept() {
        // Only the first two bytes of the mark, so nothing is consumed and the text is not UTF-8.
        let bytes = [0xEF, 0xBB, b't', b'=', b'1'];
        let err = parse_ksh_bytes(&bytes, default_config()).unwrap_err();
        assert!(matches!(err, KshError::Encoding(_)));
    }

    #[test]
    fn reader_entry_point() {
        let chart = parse_ksh_reader(SRC.as_bytes(), default_config()).unwrap();
        assert_eq!(chart.metadata().get("artist"), Some("Foo"));
        assert_eq!(chart.block_count(), 1);
    }

    struct BrokenReader;

    impl Read for BrokenReader {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("disk unplugged"))
        }
    }

    #[test]
    fn reader_error_is_io() {
        let err = parse_ksh_reader(BrokenReader, default_config()).unwrap_err();
        assert!(matches!(err, KshError::Io(_)));
        assert!(err.to_string().contains("disk unplugged"));
    }

    #[test]
    fn parse_error_is_wrapped() {
        let err = parse_ksh_bytes(b"title\r\n--\r\n", default_config()).unwrap_err();
        assert!(matches!(err, KshError::Parse(_)));
        assert_eq!(err.to_string(), "parse: expected `key=value` in the header at line 1 at indices [0, 5)");
    }

    #[test]
    fn config_builder() {
        assert!(!default_config().is_metadata_only());
        assert!(default_config().metadata_only(true).is_metadata_only());
    }
}
