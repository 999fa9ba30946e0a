//! Post-inlining removal of bare `__typename` fields.

use crate::document_scanner::is_name_start;
use crate::ByteSpan;
use crate::DocumentScanner;
use crate::FlattenError;
use crate::SourcePosition;

/// Removes every bare `__typename` field from already-flattened query text.
///
/// "Bare" means a plain meta-field selection: not aliased
/// (`myName: __typename` is kept), not used as an alias
/// (`__typename: id` is kept), and carrying no arguments or sub-selection.
/// Directives on a removed field (`__typename @include(if: $x)`) modify
/// nothing once the field is gone, so they are removed with it rather than
/// left dangling. Occurrences inside string literals and comments are
/// content and are never touched.
///
/// # Errors
///
/// - [`FlattenError::Parse`] if a string literal is unterminated.
/// - [`FlattenError::EmptySelectionSet`] if a removal leaves a selection
///   set with no fields — emitting `{ }` would be invalid GraphQL, so the
///   condition is reported instead of silently producing a malformed
///   query.
pub fn strip_typename(text: &str) -> Result<String, FlattenError> {
    let removals = collect_bare_typename_spans(text)?;
    if removals.is_empty() {
        return Ok(text.to_string());
    }

    let mut output = String::with_capacity(text.len());
    let mut copied_up_to = 0;
    for span in &removals {
        output.push_str(&text[copied_up_to..span.start]);
        copied_up_to = span.end;
    }
    output.push_str(&text[copied_up_to..]);

    if let Some(position) = find_empty_selection_set(&output)? {
        return Err(FlattenError::EmptySelectionSet { position });
    }
    Ok(output)
}

/// Finds the spans of all bare `__typename` fields in `text`.
fn collect_bare_typename_spans(text: &str) -> Result<Vec<ByteSpan>, FlattenError> {
    let mut scanner = DocumentScanner::new(text);
    let mut spans = vec![];
    // Whether the previous significant character was `:`, which would make
    // a following `__typename` the value of an alias.
    let mut prev_was_colon = false;

    loop {
        scanner.skip_ignored();
        match scanner.peek_char() {
            None => break,
            Some('"') => {
                scanner.skip_string()?;
                prev_was_colon = false;
            }
            Some(ch) if is_name_start(ch) => {
                let start_offset = scanner.curr_byte_offset();
                let name = scanner.read_name();
                let aliased_value = prev_was_colon;
                prev_was_colon = false;
                if name != Some("__typename") || aliased_value {
                    continue;
                }
                let end_offset = scanner.curr_byte_offset();
                // Peek past ignored tokens: `:` means `__typename` is being
                // used as an alias, and `(` / `{` mean this is not the bare
                // meta-field. The skipped tokens stay in the output since
                // only recorded spans are removed.
                scanner.skip_ignored();
                match scanner.peek_char() {
                    Some(':' | '(' | '{') => {}
                    Some('@') => {
                        // Directives modify the field being removed, so the
                        // removal span is extended over them; a `{` after
                        // the directives still means this is not the bare
                        // meta-field.
                        if let Some(directives_end) = scan_directives(&mut scanner)? {
                            if scanner.peek_char() != Some('{') {
                                spans.push(ByteSpan::new(start_offset, directives_end));
                            }
                        }
                    }
                    _ => spans.push(ByteSpan::new(start_offset, end_offset)),
                }
            }
            Some(ch) => {
                scanner.consume();
                prev_was_colon = ch == ':';
            }
        }
    }

    Ok(spans)
}

/// Scans past the run of directives attached to a field and returns the
/// byte offset just past the last directive name or argument group,
/// excluding trailing ignored tokens.
///
/// The caller must have peeked a `@`. A `@` with no name following it is
/// malformed; `None` is returned so the caller keeps the field it was
/// meant to modify intact.
fn scan_directives(
    scanner: &mut DocumentScanner<'_>,
) -> Result<Option<usize>, FlattenError> {
    let mut end_offset = None;
    while scanner.peek_char() == Some('@') {
        scanner.consume();
        if scanner.read_name().is_none() {
            return Ok(None);
        }
        end_offset = Some(scanner.curr_byte_offset());
        scanner.skip_ignored();
        if scanner.peek_char() == Some('(') {
            scanner.skip_balanced()?;
            end_offset = Some(scanner.curr_byte_offset());
            scanner.skip_ignored();
        }
    }
    Ok(end_offset)
}

/// Returns the position of the first empty selection set in `text`, if
/// any.
///
/// Braced groups inside parentheses are argument object literals (where
/// `{}` is a legal value), so only braces at parenthesis depth zero are
/// checked.
fn find_empty_selection_set(text: &str) -> Result<Option<SourcePosition>, FlattenError> {
    let mut scanner = DocumentScanner::new(text);
    let mut paren_depth: usize = 0;

    loop {
        scanner.skip_ignored();
        match scanner.peek_char() {
            None => return Ok(None),
            Some('"') => scanner.skip_string()?,
            Some('(') => {
                paren_depth += 1;
                scanner.consume();
            }
            Some(')') => {
                paren_depth = paren_depth.saturating_sub(1);
                scanner.consume();
            }
            Some('{') => {
                let position = scanner.curr_position();
                scanner.consume();
                scanner.skip_ignored();
                if paren_depth == 0 && scanner.peek_char() == Some('}') {
                    return Ok(Some(position));
                }
            }
            Some(ch) if is_name_start(ch) => {
                scanner.read_name();
            }
            Some(_) => {
                scanner.consume();
            }
        }
    }
}
