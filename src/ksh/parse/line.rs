use std::ops::Range;

/// A line of the source with its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Line<'a> {
    /// The line number, starts with 1.
    pub number: usize,
    /// The index span of the content in the source, excluding the line ending.
    pub range: (usize, usize),
    /// The content without the line ending.
    pub text: &'a str,
}

impl Line<'_> {
    pub const fn range(&self) -> Range<usize> {
        self.range.0..self.range.1
    }
}

/// Iterates the lines of the source, ended by CRLF (`\r\n`) or a bare LF.
///
/// A line ending at the end of the source does not make an empty line after it.
#[derive(Debug, Clone)]
pub(crate) struct LineReader<'a> {
    /// The line number of the next line, starts with 1.
    line: usize,
    /// The index position.
    index: usize,
    /// The source str.
    source: &'a str,
}

impl<'a> LineReader<'a> {
    /// Reads `source` from the index `start`, which must be on a char boundary.
    pub const fn new(source: &'a str, start: usize) -> Self {
        Self {
            line: 1,
            index: start,
            source,
        }
    }

    /// Determine the end of the current line and handle CRLF (\r\n) correctly.
    ///
    /// Returns a tuple `(consumed, line_end_index)` where `consumed` is the byte count to skip including the line feed, and `line_end_index` is the absolute byte index where the line content ends (exclusive).
    fn current_line_bounds(&self) -> (usize, usize) {
        let rest = &self.source[self.index..];
        let (content_len, consumed) = rest.find('\n').map_or((rest.len(), rest.len()), |lf| (lf, lf + 1));
        let content = &rest[..content_len];
        let content_len = content.strip_suffix('\r').map_or(content_len, str::len);
        (consumed, self.index + content_len)
    }
}

impl<'a> Iterator for LineReader<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.source.len() {
            return None;
        }
        let (consumed, line_end) = self.current_line_bounds();
        let line = Line {
            number: self.line,
            range: (self.index, line_end),
            text: &self.source[self.index..line_end],
        };
        self.line += 1;
        self.index += consumed;
        Some(line)
    }
}
