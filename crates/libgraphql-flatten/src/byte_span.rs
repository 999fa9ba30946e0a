/// A half-open interval `[start, end)` of byte offsets into source text.
///
/// Both offsets are 0-based. Spans are produced by the extraction and
/// spread-finding scans and are used to slice fragment definitions,
/// operation content, and spread sites back out of the text they were
/// found in.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ByteSpan {
    /// Byte offset of the first byte of the spanned text (inclusive).
    pub start: usize,
    /// Byte offset one past the last byte of the spanned text (exclusive).
    pub end: usize,
}

impl ByteSpan {
    /// Creates a new `ByteSpan` from start (inclusive) and end (exclusive)
    /// byte offsets.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length of this span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if this span has zero length.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the text this span covers within `source`.
    ///
    /// Callers must pass the same text the span was computed against.
    pub fn slice<'src>(&self, source: &'src str) -> &'src str {
        &source[self.start..self.end]
    }
}
