//! Parsing [`Chart`] from the source text.
//!
//! The source is read line by line. Raw [`str`] == header phase ==> [`Metadata`] == body phase ==> [`Block`]s (in [`Chart`])
//!
//! - Header phase: `key=value` lines until the separator `--`. Lines are trimmed, and blank lines are skipped.
//! - Body phase: until a blank line or the end of the source. A line is the separator, a `key=value` setting, or a note line `BBBB|FF|LL...`.
//!
//! A block is sealed by the separator line after it. The ticks after the last separator are not sealed, so they are dropped from the chart.
//!
//! [`Metadata`]: super::model::metadata::Metadata

pub(crate) mod line;

use itertools::Itertools;
use thiserror::Error;
use tracing::{debug, error, warn};

use super::{
    ParseConfig, SEPARATOR,
    mixin::{SourceRangeMixin, SourceRangeMixinExt},
    model::{
        Chart,
        block::Block,
        metadata::{Metadata, Settings},
        tick::Tick,
    },
    time::KshTime,
};

use self::line::{Line, LineReader};

/// An error occurred when parsing the KSH source.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum ParseError {
    /// A header line had no `=`.
    #[error("expected `key=value` in the header at line {line}")]
    MalformedHeader {
        /// The line number.
        line: usize,
    },
    /// The buttons field of a note line was not 4 characters.
    #[error("expected 4 buttons, but found `{buttons}` at line {line}")]
    InvalidButtons {
        /// The line number.
        line: usize,
        /// The buttons field as written.
        buttons: String,
    },
    /// The FX field of a note line was not 2 characters.
    #[error("expected 2 FX buttons, but found `{fx}` at line {line}")]
    InvalidFx {
        /// The line number.
        line: usize,
        /// The FX field as written.
        fx: String,
    },
    /// The laser field of a note line was shorter than 2 characters.
    #[error("expected 2 lasers, but found `{laser}` at line {line}")]
    InvalidLaser {
        /// The line number.
        line: usize,
        /// The laser field as written.
        laser: String,
    },
}

impl ParseError {
    /// Returns the line number where the error occurred, starts with 1.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::MalformedHeader { line }
            | Self::InvalidButtons { line, .. }
            | Self::InvalidFx { line, .. }
            | Self::InvalidLaser { line, .. } => *line,
        }
    }
}

/// A parse error with position information.
pub type ParseErrorWithRange = SourceRangeMixin<ParseError>;

/// Type alias of `core::result::Result<T, ParseErrorWithRange>`
pub(crate) type Result<T> = core::result::Result<T, ParseErrorWithRange>;

fn fail(err: ParseError, line: &Line<'_>) -> ParseErrorWithRange {
    error!(line = line.number, "{err}");
    err.into_wrapper_line(line.number, line.range())
}

/// Parses the source from the index `start`, which is after the byte order mark if any.
pub(crate) fn parse_source(source: &str, start: usize, config: ParseConfig) -> Result<Chart> {
    let mut lines = LineReader::new(source, start);

    let metadata = parse_header(&mut lines)?;
    debug!(keys = metadata.len(), "parsed KSH header");
    if config.is_metadata_only() {
        return Ok(Chart {
            metadata,
            blocks: vec![],
        });
    }

    let mut body = BodyState::new();
    for line in lines {
        if line.text.is_empty() {
            break;
        }
        body.on_line(&line)?;
    }
    let blocks = body.finish();
    debug!(blocks = blocks.len(), "parsed KSH body");
    Ok(Chart { metadata, blocks })
}

fn parse_header(lines: &mut LineReader<'_>) -> Result<Metadata> {
    let mut metadata = Metadata::default();
    for line in lines.take_while_ref(|line| line.text.trim() != SEPARATOR) {
        let text = line.text.trim();
        if text.is_empty() {
            continue;
        }
        let (key, value) = text
            .split_once('=')
            .ok_or_else(|| fail(ParseError::MalformedHeader { line: line.number }, &line))?;
        metadata.upsert(key, value);
    }
    // The separator, or `None` if the source ended in the header.
    lines.next();
    Ok(metadata)
}

/// Accumulates the body lines into blocks.
#[derive(Debug)]
struct BodyState {
    blocks: Vec<Block>,
    block: Block,
    /// Settings waiting for the next note line.
    pending: Settings,
    /// Settings met in the current block after its last note line.
    trailing: Settings,
    time: KshTime,
}

impl BodyState {
    fn new() -> Self {
        Self {
            blocks: vec![],
            block: Block::default(),
            pending: Settings::default(),
            trailing: Settings::default(),
            time: KshTime::START,
        }
    }

    fn on_line(&mut self, line: &Line<'_>) -> Result<()> {
        if line.text == SEPARATOR {
            self.seal();
        } else if let Some((key, value)) = line.text.split_once('=') {
            self.pending.upsert(key, value);
            self.trailing.upsert(key, value);
        } else {
            self.trailing.clear();
            let tick = parse_note(line, std::mem::take(&mut self.pending))?;
            self.block.ticks.push(tick);
            self.time.tick += 1;
        }
        Ok(())
    }

    fn seal(&mut self) {
        if !self.trailing.is_empty() {
            warn!(
                block = self.time.block,
                "settings after the last note line are carried over to the next block"
            );
            self.block.settings = std::mem::take(&mut self.trailing);
        }
        self.blocks.push(std::mem::take(&mut self.block));
        self.time.block += 1;
        self.time.tick = 0;
    }

    fn finish(self) -> Vec<Block> {
        if !self.block.is_empty() {
            warn!(
                block = self.time.block,
                ticks = self.block.tick_count(),
                "block without closing separator is dropped"
            );
        }
        self.blocks
    }
}

/// Parses the note line `BBBB|FF|LL...` into a tick.
fn parse_note(line: &Line<'_>, settings: Settings) -> Result<Tick> {
    let (buttons, rest) = line.text.split_once('|').unwrap_or((line.text, ""));
    let (fx, laser_and_extra) = rest.split_once('|').unwrap_or((rest, ""));
    if buttons.chars().count() != 4 {
        return Err(fail(
            ParseError::InvalidButtons {
                line: line.number,
                buttons: buttons.into(),
            },
            line,
        ));
    }
    if fx.chars().count() != 2 {
        return Err(fail(
            ParseError::InvalidFx {
                line: line.number,
                fx: fx.into(),
            },
            line,
        ));
    }
    let (laser, extra) = match laser_and_extra.char_indices().nth(2) {
        Some((split, _)) => laser_and_extra.split_at(split),
        None if laser_and_extra.chars().count() == 2 => (laser_and_extra, ""),
        None => {
            return Err(fail(
                ParseError::InvalidLaser {
                    line: line.number,
                    laser: laser_and_extra.into(),
                },
                line,
            ));
        }
    };
    Ok(Tick {
        buttons: buttons.into(),
        fx: fx.into(),
        laser: laser.into(),
        extra: extra.into(),
        settings,
    })
}
