//! Fancy diagnostics support using `ariadne`.
//!
//! This module converts [`ParseErrorWithRange`] into `ariadne::Report`. The error carries the byte span of the offending line, so ariadne handles the row/column calculations for display.
//!
//! # Usage Example
//!
//! ```rust
//! use ksh_rs::{diagnostics::emit_ksh_error, ksh::{default_config, parse_ksh}};
//!
//! let source = "title=Test\r\n--\r\n100|00|--\r\n--\r\n";
//! if let Err(err) = parse_ksh(source, default_config()) {
//!     emit_ksh_error("test.ksh", source, &err).unwrap();
//! }
//! ```

use ariadne::{Color, Label, Report, ReportKind, Source};

use crate::ksh::parse::{ParseError, ParseErrorWithRange};

/// Simple source container that holds the filename and source text.
/// The reports index it by bytes, the same as the spans in [`ParseErrorWithRange`].
///
/// ```rust
/// use ksh_rs::diagnostics::SimpleSource;
///
/// let source_text = "title=test\r\n--\r\n";
/// let source = SimpleSource::new("test.ksh", source_text);
/// assert_eq!(source.text(), source_text);
/// assert_eq!(source.name(), "test.ksh");
/// ```
pub struct SimpleSource<'a> {
    /// Name of the source file.
    name: &'a str,
    /// Source text content.
    text: &'a str,
}

impl<'a> SimpleSource<'a> {
    /// Create a new source container instance.
    #[must_use]
    pub const fn new(name: &'a str, text: &'a str) -> Self {
        Self { name, text }
    }

    /// Get source text content.
    #[must_use]
    pub const fn text(&self) -> &'a str {
        self.text
    }

    /// Get source file name.
    #[must_use]
    pub const fn name(&self) -> &'a str {
        self.name
    }
}

/// Trait for converting positioned errors to `ariadne::Report`.
pub trait ToAriadne {
    /// Convert error to ariadne Report.
    ///
    /// `src` is used for the filename, and ariadne handles row/column calculation.
    fn to_report<'a>(&self, src: &SimpleSource<'a>)
    -> Report<'a, (String, std::ops::Range<usize>)>;
}

impl ToAriadne for ParseErrorWithRange {
    fn to_report<'a>(
        &self,
        src: &SimpleSource<'a>,
    ) -> Report<'a, (String, std::ops::Range<usize>)> {
        let range = self.range();
        let filename = src.name().to_string();
        let label = match self.content() {
            ParseError::MalformedHeader { .. } => "missing `=` between key and value",
            ParseError::InvalidButtons { .. } => "buttons must be 4 characters",
            ParseError::InvalidFx { .. } => "FX buttons must be 2 characters",
            ParseError::InvalidLaser { .. } => "lasers must be at least 2 characters",
        };
        Report::build(ReportKind::Error, (filename.clone(), range.clone()))
            .with_config(ariadne::Config::new().with_index_type(ariadne::IndexType::Byte))
            .with_message("parse: ".to_string() + &self.content().to_string())
            .with_label(
                Label::new((filename, range))
                    .with_message(label)
                    .with_color(Color::Red),
            )
            .finish()
    }
}

/// Renders the parse error to stderr.
///
/// # Parameters
/// * `name` - Name of the source file, used for display in diagnostic information
/// * `source` - Complete KSH source text, which the error came from
/// * `error` - The error to display
///
/// # Errors
///
/// Returns the error of writing to stderr.
pub fn emit_ksh_error(
    name: &str,
    source: &str,
    error: &ParseErrorWithRange,
) -> std::io::Result<()> {
    let simple = SimpleSource::new(name, source);
    let report = error.to_report(&simple);
    report.eprint((name.to_string(), Source::from(source)))
}

/// Builds the `ariadne::Report` of the parse error without printing.
#[must_use]
pub fn collect_ksh_report<'a>(
    name: &'a str,
    source: &'a str,
    error: &ParseErrorWithRange,
) -> Report<'a, (String, std::ops::Range<usize>)> {
    error.to_report(&SimpleSource::new(name, source))
}
