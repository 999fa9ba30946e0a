use crate::strip_typename;
use crate::DocumentScanner;
use crate::FlattenError;
use crate::FlattenOptions;
use crate::FragmentExtractor;
use crate::FragmentInliner;

/// Flattens a GraphQL query document: extracts all fragment definitions,
/// inlines every fragment spread (transitively), discards the orphaned
/// definitions, and optionally strips bare `__typename` fields.
///
/// The output is valid-braced GraphQL text with zero fragment definitions
/// and zero fragment spreads. Blank lines left behind where definitions
/// were removed are collapsed, but no other formatting is applied —
/// pretty-printing is left to an external formatter.
///
/// Comments inside an operation definition are part of its text and
/// survive verbatim. Comments *between* top-level definitions are ignored
/// tokens belonging to no definition — most of them describe fragments
/// that no longer exist in the output — and are dropped.
///
/// # Errors
///
/// Any [`FlattenError`]; see its variants for the full taxonomy. Errors
/// abort the run — there is no partial output.
pub fn flatten(source: &str, options: &FlattenOptions) -> Result<String, FlattenError> {
    let document = FragmentExtractor::extract(source)?;
    log::debug!(
        "Extracted {} fragment definition(s) from the document.",
        document.fragments().len(),
    );

    let inlined = FragmentInliner::new(document.fragments()).inline(document.operation_text())?;

    let result = if options.strip_typename {
        strip_typename(&inlined)?
    } else {
        inlined
    };

    Ok(collapse_blank_lines(&result)?.trim().to_string())
}

/// Collapses runs of blank (all-whitespace) lines down to a single line
/// break, leaving string literals and comments untouched.
fn collapse_blank_lines(text: &str) -> Result<String, FlattenError> {
    let mut scanner = DocumentScanner::new(text);
    let mut output = String::with_capacity(text.len());

    loop {
        match scanner.peek_char() {
            None => break,
            Some('"') => {
                // Copied verbatim; a block string may legitimately contain
                // blank lines.
                let start_offset = scanner.curr_byte_offset();
                scanner.skip_string()?;
                output.push_str(&text[start_offset..scanner.curr_byte_offset()]);
            }
            Some('#') => {
                let start_offset = scanner.curr_byte_offset();
                scanner.skip_comment();
                output.push_str(&text[start_offset..scanner.curr_byte_offset()]);
            }
            Some(ch @ ('\n' | '\r')) => {
                scanner.consume();
                if ch == '\r' && scanner.peek_char() == Some('\n') {
                    scanner.consume();
                }
                output.push('\n');
                swallow_blank_lines(&mut scanner);
            }
            Some(ch) => {
                scanner.consume();
                output.push(ch);
            }
        }
    }

    Ok(output)
}

/// Advances the scanner past any all-whitespace lines immediately ahead of
/// it. Indentation of the next non-blank line is preserved.
fn swallow_blank_lines(scanner: &mut DocumentScanner<'_>) {
    loop {
        let bytes = scanner.remaining().as_bytes();
        let mut idx = 0;
        while idx < bytes.len() && (bytes[idx] == b' ' || bytes[idx] == b'\t') {
            idx += 1;
        }
        if idx < bytes.len() && (bytes[idx] == b'\n' || bytes[idx] == b'\r') {
            let mut skip_len = idx + 1;
            if bytes[idx] == b'\r' && skip_len < bytes.len() && bytes[skip_len] == b'\n' {
                skip_len += 1;
            }
            scanner.advance_bytes(skip_len);
        } else {
            break;
        }
    }
}
