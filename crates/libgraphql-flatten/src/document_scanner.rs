//! Depth-aware cursor over GraphQL source text.
//!
//! This is not a full lexer: it understands exactly as much of the grammar
//! as fragment extraction and spread substitution need — ignored tokens
//! (whitespace, commas, `#` comments), string literals (so that braces
//! inside strings never count toward nesting depth), names, and balanced
//! delimiter groups tracked with an explicit depth stack.

use crate::FlattenError;
use crate::SourcePosition;

/// Returns `true` if `ch` can start a GraphQL name (`[_A-Za-z]`).
pub(crate) fn is_name_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

/// Returns `true` if `ch` can continue a GraphQL name (`[_0-9A-Za-z]`).
pub(crate) fn is_name_continue(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphanumeric()
}

/// A scanning cursor over GraphQL source text with position tracking.
///
/// The scanner walks the text left to right, maintaining the current byte
/// offset, 0-based line number, and 0-based UTF-8 character column.
/// Newlines are normalized for position purposes: `\n`, `\r`, and `\r\n`
/// each advance the line counter exactly once.
///
/// All skipping methods are string- and comment-aware: a `{` inside a
/// string literal or a `#` comment is content, not structure.
pub struct DocumentScanner<'src> {
    /// The full source text being scanned.
    source: &'src str,

    /// Current byte offset from the start of `source`. The text still to
    /// be scanned is `&source[curr_byte_offset..]`.
    curr_byte_offset: usize,

    /// Current 0-based line number.
    curr_line: usize,

    /// Current 0-based UTF-8 character column.
    curr_col_utf8: usize,

    /// Whether the previous character was `\r`, so that a following `\n`
    /// does not increment the line number a second time.
    last_char_was_cr: bool,
}

impl<'src> DocumentScanner<'src> {
    /// Creates a new scanner positioned at the start of `source`.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            curr_byte_offset: 0,
            curr_line: 0,
            curr_col_utf8: 0,
            last_char_was_cr: false,
        }
    }

    /// Returns the source text still to be scanned.
    pub fn remaining(&self) -> &'src str {
        &self.source[self.curr_byte_offset..]
    }

    /// Returns the current byte offset from the start of the source.
    pub fn curr_byte_offset(&self) -> usize {
        self.curr_byte_offset
    }

    /// Returns the current source position.
    pub fn curr_position(&self) -> SourcePosition {
        SourcePosition::new(self.curr_line, self.curr_col_utf8, self.curr_byte_offset)
    }

    /// Returns `true` if the scanner has consumed the entire source.
    pub fn is_at_end(&self) -> bool {
        self.curr_byte_offset >= self.source.len()
    }

    /// Peeks at the next character without consuming it.
    ///
    /// Returns `None` at end of input.
    pub fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Consumes the next character and updates position tracking.
    ///
    /// Returns `None` at end of input.
    pub fn consume(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.bump(ch);
        Some(ch)
    }

    /// Advances position tracking past `ch`, which must be the next
    /// character of the remaining text.
    fn bump(&mut self, ch: char) {
        if ch == '\n' {
            if self.last_char_was_cr {
                // The \n of a \r\n pair: the line was already advanced when
                // the \r was seen.
                self.last_char_was_cr = false;
            } else {
                self.curr_line += 1;
                self.curr_col_utf8 = 0;
            }
        } else if ch == '\r' {
            self.curr_line += 1;
            self.curr_col_utf8 = 0;
            self.last_char_was_cr = true;
        } else {
            self.curr_col_utf8 += 1;
            self.last_char_was_cr = false;
        }
        self.curr_byte_offset += ch.len_utf8();
    }

    /// Advances the scanner by `byte_count` bytes, keeping line and column
    /// tracking accurate across any newlines in the skipped text.
    pub(crate) fn advance_bytes(&mut self, byte_count: usize) {
        let target = self.curr_byte_offset + byte_count;
        while self.curr_byte_offset < target {
            let Some(ch) = self.peek_char() else {
                break;
            };
            self.bump(ch);
        }
    }

    /// Skips ignored tokens: whitespace (including the Unicode BOM, which
    /// GraphQL permits anywhere), commas, and `#` comments.
    pub fn skip_ignored(&mut self) {
        while let Some(ch) = self.peek_char() {
            match ch {
                ' ' | '\t' | '\n' | '\r' | ',' | '\u{FEFF}' => {
                    self.consume();
                }
                '#' => self.skip_comment(),
                _ => break,
            }
        }
    }

    /// Skips a `#` comment up to (but not including) the line terminator.
    ///
    /// The caller must have peeked a `#`.
    pub fn skip_comment(&mut self) {
        self.consume();
        // Comments cannot contain newlines, so the rest of the line can be
        // skipped in one jump.
        match memchr::memchr2(b'\n', b'\r', self.remaining().as_bytes()) {
            Some(newline_offset) => self.advance_bytes(newline_offset),
            None => self.advance_bytes(self.remaining().len()),
        }
    }

    /// Reads a GraphQL name (`[_A-Za-z][_0-9A-Za-z]*`) and returns it as a
    /// slice of the source.
    ///
    /// Returns `None` without consuming anything if the next character
    /// cannot start a name.
    pub fn read_name(&mut self) -> Option<&'src str> {
        match self.peek_char() {
            Some(ch) if is_name_start(ch) => {}
            _ => return None,
        }
        let start = self.curr_byte_offset;
        while let Some(ch) = self.peek_char() {
            if is_name_continue(ch) {
                self.consume();
            } else {
                break;
            }
        }
        Some(&self.source[start..self.curr_byte_offset])
    }

    /// Skips a string literal — either `"…"` (with backslash escapes) or a
    /// `"""…"""` block string.
    ///
    /// The caller must have peeked a `"`. An unterminated literal is a
    /// [`FlattenError::Parse`].
    pub fn skip_string(&mut self) -> Result<(), FlattenError> {
        let start_position = self.curr_position();
        if self.remaining().starts_with("\"\"\"") {
            return self.skip_block_string(start_position);
        }

        // Opening quote
        self.consume();
        while let Some(ch) = self.consume() {
            match ch {
                '"' => return Ok(()),
                '\\' => {
                    // Consume whatever is escaped, including `\"`.
                    self.consume();
                }
                '\n' | '\r' => {
                    return Err(FlattenError::Parse {
                        message: "unterminated string literal".to_string(),
                        position: start_position,
                    });
                }
                _ => {}
            }
        }
        Err(FlattenError::Parse {
            message: "unterminated string literal".to_string(),
            position: start_position,
        })
    }

    /// Skips a `"""…"""` block string, whose terminator is located with a
    /// substring search since block strings may span many lines.
    fn skip_block_string(
        &mut self,
        start_position: SourcePosition,
    ) -> Result<(), FlattenError> {
        // Opening `"""`
        self.advance_bytes(3);
        loop {
            let remaining = self.remaining();
            match memchr::memmem::find(remaining.as_bytes(), b"\"\"\"") {
                None => {
                    return Err(FlattenError::Parse {
                        message: "unterminated block string".to_string(),
                        position: start_position,
                    });
                }
                Some(quote_offset) => {
                    self.advance_bytes(quote_offset + 3);
                    // `\"""` escapes the terminator; keep searching past it.
                    let escaped = quote_offset > 0
                        && remaining.as_bytes()[quote_offset - 1] == b'\\';
                    if !escaped {
                        return Ok(());
                    }
                }
            }
        }
    }

    /// Skips a balanced delimiter group (`{…}`, `(…)`, or `[…]`),
    /// including arbitrarily nested groups, strings, and comments inside
    /// it.
    ///
    /// The caller must have peeked one of the opening delimiters; the
    /// scanner ends up positioned just past the matching closer. Nesting
    /// is tracked with an explicit stack, so unclosed and mismatched
    /// delimiters are both reported as [`FlattenError::Parse`] with the
    /// relevant position.
    pub fn skip_balanced(&mut self) -> Result<(), FlattenError> {
        let mut open_delimiters: Vec<(char, SourcePosition)> = vec![];
        loop {
            match self.peek_char() {
                None => {
                    return match open_delimiters.pop() {
                        Some((delimiter, position)) => Err(FlattenError::Parse {
                            message: format!("unclosed `{delimiter}`"),
                            position,
                        }),
                        // Only reachable if called at end of input.
                        None => Err(FlattenError::Parse {
                            message: "unexpected end of input".to_string(),
                            position: self.curr_position(),
                        }),
                    };
                }
                Some('#') => self.skip_comment(),
                Some('"') => self.skip_string()?,
                Some(ch @ ('{' | '(' | '[')) => {
                    open_delimiters.push((ch, self.curr_position()));
                    self.consume();
                }
                Some(ch @ ('}' | ')' | ']')) => {
                    let position = self.curr_position();
                    match open_delimiters.pop() {
                        Some((open, _)) if matching_closer(open) == ch => {
                            self.consume();
                            if open_delimiters.is_empty() {
                                return Ok(());
                            }
                        }
                        Some((open, open_position)) => {
                            return Err(FlattenError::Parse {
                                message: format!(
                                    "mismatched delimiter: expected `{}` to close the \
                                     `{open}` at {open_position}, found `{ch}`",
                                    matching_closer(open),
                                ),
                                position,
                            });
                        }
                        None => {
                            return Err(FlattenError::Parse {
                                message: format!("unexpected `{ch}`"),
                                position,
                            });
                        }
                    }
                }
                Some(_) => {
                    self.consume();
                }
            }
        }
    }
}

/// Returns the closing delimiter matching `open`.
fn matching_closer(open: char) -> char {
    match open {
        '{' => '}',
        '(' => ')',
        _ => ']',
    }
}
