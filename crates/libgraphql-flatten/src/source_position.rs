/// Source position information carried on parse-stage errors.
///
/// This is a pure data struct with no mutation methods; the
/// [`DocumentScanner`](crate::DocumentScanner) is responsible for computing
/// position values as it scans input.
///
/// # Indexing Convention
///
/// **All position values are 0-based:**
/// - `line`: 0 = first line of the document
/// - `col_utf8`: UTF-8 character count within the current line
/// - `byte_offset`: byte offset within the whole document
///
/// The [`std::fmt::Display`] impl renders the position 1-based
/// (`line:column`), matching what most editors show to humans.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SourcePosition {
    /// Line number (0-based: first line is 0)
    line: usize,

    /// UTF-8 character count within current line (0-based). This counts
    /// characters, not bytes: a multi-byte character advances it by 1.
    col_utf8: usize,

    /// Byte offset from the start of the document (0-based).
    byte_offset: usize,
}

impl SourcePosition {
    /// Creates a new `SourcePosition` from 0-based components.
    pub fn new(line: usize, col_utf8: usize, byte_offset: usize) -> Self {
        Self {
            line,
            col_utf8,
            byte_offset,
        }
    }

    /// Returns the 0-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 0-based UTF-8 character column within the current line.
    pub fn col_utf8(&self) -> usize {
        self.col_utf8
    }

    /// Returns the 0-based byte offset from the start of the document.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }
}

impl std::fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.col_utf8 + 1)
    }
}
