//! Helpers shared across the flattening tests.

/// Normalizes GraphQL text for structural comparison: punctuation gets
/// spaced out, commas (which are ignored tokens) are dropped, and all
/// whitespace runs collapse to single spaces.
///
/// This lets tests assert on field structure without coupling to the exact
/// spacing the substitution passes happen to produce.
pub(crate) fn normalized(text: &str) -> String {
    let mut spaced = String::with_capacity(text.len() * 2);
    for ch in text.chars() {
        match ch {
            '{' | '}' | '(' | ')' | '[' | ']' | ':' => {
                spaced.push(' ');
                spaced.push(ch);
                spaced.push(' ');
            }
            ',' => spaced.push(' '),
            _ => spaced.push(ch),
        }
    }
    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}
