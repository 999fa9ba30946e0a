//! Tests for fixed-point fragment-spread substitution.

use crate::find_spreads;
use crate::tests::utils::normalized;
use crate::FlattenError;
use crate::FragmentExtractor;
use crate::FragmentInliner;

/// Runs extraction + inlining over a document and returns the expanded
/// operation text.
fn inline_document(document: &str) -> Result<String, FlattenError> {
    let extracted = FragmentExtractor::extract(document)?;
    FragmentInliner::new(extracted.fragments()).inline(extracted.operation_text())
}

/// Verifies that a single spread is replaced by the fragment's body.
#[test]
fn inlines_single_spread() {
    let inlined = inline_document("query Q { ...F }\nfragment F on T { x y }").unwrap();
    assert_eq!(normalized(&inlined), "query Q { x y }");
    assert!(find_spreads(&inlined).unwrap().is_empty());
}

/// Verifies nesting correctness at depth 3: A spreads B spreads C, and
/// C's fields end up inline at A's spread site.
#[test]
fn inlines_nested_fragments_to_depth_three() {
    let document = "\
query Q { ...A }
fragment A on T { a ...B }
fragment B on T { b ...C }
fragment C on T { c }
";
    let inlined = inline_document(document).unwrap();
    assert_eq!(normalized(&inlined), "query Q { a b c }");
}

/// Verifies that a fragment spread at several sites is expanded at every
/// one of them.
#[test]
fn inlines_spread_at_multiple_sites() {
    let document = "\
query Q { left { ...F } right { ...F } }
fragment F on T { id }
";
    let inlined = inline_document(document).unwrap();
    assert_eq!(
        normalized(&inlined),
        "query Q { left { id } right { id } }",
    );
}

/// Verifies that ignored tokens between the ellipsis and the fragment
/// name still count as a spread.
#[test]
fn inlines_spread_with_space_after_ellipsis() {
    let inlined = inline_document("{ ... F }\nfragment F on T { x }").unwrap();
    assert_eq!(normalized(&inlined), "{ x }");
}

/// Verifies that a spread of an undefined fragment is an UnknownFragment
/// error rather than being left in place or dropped.
#[test]
fn unknown_fragment_is_an_error() {
    let error = inline_document("query Q { ...Missing }").unwrap_err();
    assert_eq!(
        error,
        FlattenError::UnknownFragment {
            name: "Missing".to_string(),
        },
    );
}

/// Verifies that a two-fragment reference cycle terminates with an
/// UnresolvedSpreads error instead of looping forever.
#[test]
fn cyclic_fragments_are_an_error() {
    let document = "\
query Q { ...A }
fragment A on T { ...B }
fragment B on T { ...A }
";
    let error = inline_document(document).unwrap_err();
    assert!(matches!(error, FlattenError::UnresolvedSpreads { .. }));
}

/// Verifies that a fragment spreading itself terminates with an
/// UnresolvedSpreads error.
#[test]
fn self_referential_fragment_is_an_error() {
    let document = "query Q { ...A }\nfragment A on T { x ...A }";
    let error = inline_document(document).unwrap_err();
    match error {
        FlattenError::UnresolvedSpreads { names } => {
            assert_eq!(names, vec!["A".to_string()]);
        }
        other => panic!("expected UnresolvedSpreads, got {other:?}"),
    }
}

/// Verifies that fragments which are never referenced are simply
/// discarded — even if they reference each other cyclically.
#[test]
fn unused_cyclic_fragments_are_discarded() {
    let document = "\
query Q { x }
fragment A on T { ...B }
fragment B on T { ...A }
";
    let inlined = inline_document(document).unwrap();
    assert_eq!(normalized(&inlined), "query Q { x }");
}

/// Verifies that inline fragments are not treated as spreads.
#[test]
fn inline_fragments_are_left_alone() {
    let document = "query Q { node { ... on User { id } ... @skip(if: true) { x } } }";
    let inlined = inline_document(document).unwrap();
    assert_eq!(normalized(&inlined), normalized(document));
}

/// Verifies that spread-looking text inside a string argument is content,
/// not a spread.
#[test]
fn spreads_inside_string_literals_are_ignored() {
    let document = "query Q { field(pattern: \"...NotASpread\") }";
    let inlined = inline_document(document).unwrap();
    assert_eq!(normalized(&inlined), normalized(document));
    assert!(find_spreads(&inlined).unwrap().is_empty());
}

/// Verifies that float literals in arguments do not confuse the spread
/// scanner.
#[test]
fn float_literals_are_not_spreads() {
    let document = "query Q { field(threshold: 1.5) }";
    assert!(find_spreads(document).unwrap().is_empty());
}

/// Verifies find_spreads() reports names and source order.
#[test]
fn find_spreads_reports_names_in_order() {
    let spreads = find_spreads("{ ...B x { ...A } }").unwrap();
    let names: Vec<&str> = spreads.iter().map(|spread| spread.name).collect();
    assert_eq!(names, vec!["B", "A"]);
}
