//! Text span and range types for source location tracking.
//!
//! Offsets are measured in chars from the start of the source, which is the
//! unit the scanner walks in. Line and column numbers are derived on demand
//! through a [`LineMap`].

use std::fmt;

/// A position in source text, measured as a char offset from the start.
pub type TextPos = u32;

/// A span in source text, defined by a start position and a length.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct TextSpan {
    pub start: TextPos,
    pub length: TextPos,
}

impl TextSpan {
    #[inline]
    pub fn new(start: TextPos, length: TextPos) -> Self {
        Self { start, length }
    }

    /// Create a span from start and end positions.
    #[inline]
    pub fn from_bounds(start: TextPos, end: TextPos) -> Self {
        debug_assert!(end >= start);
        Self {
            start,
            length: end.saturating_sub(start),
        }
    }

    /// The end position of this span (exclusive).
    #[inline]
    pub fn end(&self) -> TextPos {
        self.start + self.length
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Whether this span contains the given position.
    #[inline]
    pub fn contains(&self, pos: TextPos) -> bool {
        pos >= self.start && pos < self.end()
    }
}

impl fmt::Debug for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end())
    }
}

impl fmt::Display for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end())
    }
}

/// A half-open `[pos, end)` range of source text.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct TextRange {
    /// Offset of the first char covered (inclusive).
    pub pos: TextPos,
    /// Offset just past the last char covered (exclusive).
    pub end: TextPos,
}

impl TextRange {
    #[inline]
    pub fn new(pos: TextPos, end: TextPos) -> Self {
        Self { pos, end }
    }

    #[inline]
    pub fn len(&self) -> TextPos {
        self.end.saturating_sub(self.pos)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pos >= self.end
    }

    #[inline]
    pub fn to_span(&self) -> TextSpan {
        TextSpan::new(self.pos, self.len())
    }

    /// Whether `other` lies entirely inside this range.
    #[inline]
    pub fn covers(&self, other: TextRange) -> bool {
        self.pos <= other.pos && other.end <= self.end
    }
}

impl fmt::Debug for TextRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.pos, self.end)
    }
}

impl From<TextRange> for TextSpan {
    fn from(range: TextRange) -> Self {
        range.to_span()
    }
}

/// Line and column information derived from source text.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct LineAndColumn {
    /// 0-based line number.
    pub line: u32,
    /// 0-based column, in chars.
    pub character: u32,
}

impl LineAndColumn {
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

/// Char offsets of every line start, for offset to line/column conversion.
///
/// Recognizes the ECMAScript line terminators: LF, CR, CRLF, U+2028 and U+2029.
#[derive(Debug, Clone)]
pub struct LineMap {
    line_starts: Vec<TextPos>,
}

impl LineMap {
    pub fn new(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        Self::from_chars(&chars)
    }

    pub fn from_chars(text: &[char]) -> Self {
        let mut line_starts = vec![0u32];
        let mut i = 0;
        while i < text.len() {
            match text[i] {
                '\r' => {
                    if text.get(i + 1) == Some(&'\n') {
                        i += 1;
                    }
                    line_starts.push((i + 1) as u32);
                }
                '\n' | '\u{2028}' | '\u{2029}' => line_starts.push((i + 1) as u32),
                _ => {}
            }
            i += 1;
        }
        Self { line_starts }
    }

    /// Get the line number (0-based) for a char offset.
    pub fn line_of(&self, pos: TextPos) -> u32 {
        match self.line_starts.binary_search(&pos) {
            Ok(line) => line as u32,
            Err(line) => line.saturating_sub(1) as u32,
        }
    }

    pub fn line_and_column_of(&self, pos: TextPos) -> LineAndColumn {
        let line = self.line_of(pos);
        let line_start = self.line_starts[line as usize];
        LineAndColumn {
            line,
            character: pos - line_start,
        }
    }

    pub fn line_start(&self, line: u32) -> Option<TextPos> {
        self.line_starts.get(line as usize).copied()
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_span() {
        let span = TextSpan::new(5, 10);
        assert_eq!(span.end(), 15);
        assert!(span.contains(5));
        assert!(span.contains(14));
        assert!(!span.contains(15));
    }

    #[test]
    fn test_text_range_covers() {
        let outer = TextRange::new(2, 10);
        assert!(outer.covers(TextRange::new(2, 10)));
        assert!(outer.covers(TextRange::new(4, 4)));
        assert!(!outer.covers(TextRange::new(1, 5)));
        assert_eq!(outer.to_span(), TextSpan::new(2, 8));
    }

    #[test]
    fn test_line_map() {
        let map = LineMap::new("line1\nline2\nline3");
        assert_eq!(map.line_count(), 3);
        assert_eq!(map.line_of(0), 0);
        assert_eq!(map.line_of(5), 0); // the newline itself
        assert_eq!(map.line_of(6), 1);
        assert_eq!(map.line_of(12), 2);

        let lc = map.line_and_column_of(8);
        assert_eq!(lc, LineAndColumn::new(1, 2));
    }

    #[test]
    fn test_line_map_all_terminators() {
        let map = LineMap::new("a\r\nb\rc\u{2028}d\u{2029}e");
        assert_eq!(map.line_count(), 5);
        assert_eq!(map.line_of(3), 1); // b
        assert_eq!(map.line_of(5), 2); // c
        assert_eq!(map.line_start(4), Some(9));
    }

    #[test]
    fn test_line_map_counts_chars_not_bytes() {
        let map = LineMap::new("é\nx");
        assert_eq!(map.line_and_column_of(2), LineAndColumn::new(1, 0));
    }
}
