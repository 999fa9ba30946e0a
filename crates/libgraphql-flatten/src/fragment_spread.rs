use crate::document_scanner::is_name_start;
use crate::ByteSpan;
use crate::DocumentScanner;
use crate::FlattenError;

/// A `...Name` fragment spread found in operation or fragment-body text.
///
/// The span covers the full spread — from the first `.` through the last
/// character of the name — so that splicing a replacement over the span
/// removes the spread entirely.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FragmentSpread<'txt> {
    /// The referenced fragment name.
    pub name: &'txt str,
    /// The spread's location within the scanned text.
    pub span: ByteSpan,
}

/// Finds every fragment spread in `text`, in source order.
///
/// The scan is string- and comment-aware: `...` inside a string literal is
/// content. Inline fragments (`... on Type { … }` and the condition-less
/// `... { … }` / `... @dir { … }` forms) are not spreads and are left
/// alone.
///
/// # Errors
///
/// [`FlattenError::Parse`] if a string literal is unterminated.
pub fn find_spreads(text: &str) -> Result<Vec<FragmentSpread<'_>>, FlattenError> {
    let mut scanner = DocumentScanner::new(text);
    let mut spreads = vec![];

    loop {
        scanner.skip_ignored();
        match scanner.peek_char() {
            None => break,
            Some('"') => scanner.skip_string()?,
            Some('.') => {
                let start_offset = scanner.curr_byte_offset();
                scanner.consume();
                if !scanner.remaining().starts_with("..") {
                    // A lone dot: part of a float literal in an argument.
                    continue;
                }
                scanner.consume();
                scanner.consume();
                // Ignored tokens may separate the ellipsis from the name.
                scanner.skip_ignored();
                match scanner.read_name() {
                    // `... on Type { … }` is an inline fragment.
                    Some("on") => {}
                    Some(name) => spreads.push(FragmentSpread {
                        name,
                        span: ByteSpan::new(start_offset, scanner.curr_byte_offset()),
                    }),
                    // `... { … }` / `... @dir { … }`: inline fragment with
                    // no type condition.
                    None => {}
                }
            }
            Some(ch) if is_name_start(ch) => {
                // Names are consumed atomically so their characters are
                // never re-inspected as punctuation.
                scanner.read_name();
            }
            Some(_) => {
                scanner.consume();
            }
        }
    }

    Ok(spreads)
}
