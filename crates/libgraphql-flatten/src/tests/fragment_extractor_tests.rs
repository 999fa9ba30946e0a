//! Tests for splitting documents into operation text and fragment
//! definitions.

use crate::tests::utils::normalized;
use crate::FlattenError;
use crate::FragmentExtractor;

/// Verifies that a document with one query and one fragment is split into
/// operation text and a fragment mapping.
#[test]
fn extracts_operation_and_fragment() {
    let document = "\
query Q { ...UserFields }
fragment UserFields on User { id name }
";
    let extracted = FragmentExtractor::extract(document).unwrap();
    assert_eq!(normalized(extracted.operation_text()), "query Q { ...UserFields }");

    let fragment = &extracted.fragments()["UserFields"];
    assert_eq!(fragment.name(), "UserFields");
    assert_eq!(fragment.type_condition(), "User");
    assert_eq!(normalized(fragment.body()), "id name");
}

/// Verifies that fragment bodies may contain arbitrarily nested braces
/// (sub-selections and argument object literals) without corrupting the
/// extracted body.
#[test]
fn extracts_fragment_with_nested_braces() {
    let document = r#"
fragment F on Query {
  search(where: {name: {eq: "x"}}) {
    results { id }
  }
}
query Q { ...F }
"#;
    let extracted = FragmentExtractor::extract(document).unwrap();
    let body = extracted.fragments()["F"].body();
    assert_eq!(
        normalized(body),
        r#"search ( where : { name : { eq : "x" } } ) { results { id } }"#,
    );
}

/// Verifies that anonymous operation shorthand is classified as operation
/// content.
#[test]
fn extracts_anonymous_operation() {
    let extracted = FragmentExtractor::extract("{ viewer { id } }").unwrap();
    assert_eq!(normalized(extracted.operation_text()), "{ viewer { id } }");
    assert!(extracted.fragments().is_empty());
}

/// Verifies that multiple operations are concatenated in original order.
#[test]
fn concatenates_operations_in_order() {
    let document = "\
query A { a }
fragment F on T { f }
mutation B { b }
";
    let extracted = FragmentExtractor::extract(document).unwrap();
    assert_eq!(
        normalized(extracted.operation_text()),
        "query A { a } mutation B { b }",
    );
}

/// Verifies that variable-definition default values containing braces do
/// not end the operation header early.
#[test]
fn operation_variable_defaults_may_contain_braces() {
    let document = "query Q($filter: Filter = {a: {b: 1}}) @cached(ttl: 60) { x }";
    let extracted = FragmentExtractor::extract(document).unwrap();
    assert_eq!(normalized(extracted.operation_text()), normalized(document));
}

/// Verifies that a fragment definition may carry directives between its
/// type condition and its body.
#[test]
fn fragment_with_directives() {
    let document = "fragment F on T @include(if: true) { x }\n{ ...F }";
    let extracted = FragmentExtractor::extract(document).unwrap();
    assert_eq!(normalized(extracted.fragments()["F"].body()), "x");
}

/// Verifies that two fragment definitions sharing a name are a
/// DuplicateFragment error.
#[test]
fn duplicate_fragment_names_are_an_error() {
    let document = "\
fragment F on T { x }
fragment F on T { y }
query Q { ...F }
";
    let error = FragmentExtractor::extract(document).unwrap_err();
    assert_eq!(
        error,
        FlattenError::DuplicateFragment {
            name: "F".to_string(),
        },
    );
}

/// Verifies that a fragment definition missing its `on` clause is a Parse
/// error.
#[test]
fn fragment_without_on_clause_is_parse_error() {
    let error = FragmentExtractor::extract("fragment F { x }").unwrap_err();
    match error {
        FlattenError::Parse { message, .. } => {
            assert!(message.contains("expected `on`"));
        }
        other => panic!("expected a Parse error, got {other:?}"),
    }
}

/// Verifies that `on` is rejected as a fragment name.
#[test]
fn fragment_named_on_is_parse_error() {
    let error = FragmentExtractor::extract("fragment on on T { x }").unwrap_err();
    assert!(matches!(error, FlattenError::Parse { .. }));
}

/// Verifies that a top-level construct that is neither an operation nor a
/// fragment definition is a Parse error.
#[test]
fn unknown_top_level_construct_is_parse_error() {
    let error = FragmentExtractor::extract("type User { id: ID }").unwrap_err();
    match error {
        FlattenError::Parse { message, position } => {
            assert!(message.contains("type"));
            assert_eq!(position.line(), 0);
        }
        other => panic!("expected a Parse error, got {other:?}"),
    }
}

/// Verifies that unbalanced braces anywhere in the document are a Parse
/// error.
#[test]
fn unbalanced_braces_are_parse_error() {
    let error = FragmentExtractor::extract("query Q { x ").unwrap_err();
    assert!(matches!(error, FlattenError::Parse { .. }));
}

/// Verifies that comments and commas between definitions are ignored.
#[test]
fn ignores_comments_and_commas_between_definitions() {
    let document = "\
# leading comment with a stray {
query Q { ...F },
# trailing comment
fragment F on T { x }
";
    let extracted = FragmentExtractor::extract(document).unwrap();
    assert_eq!(extracted.fragments().len(), 1);
    assert_eq!(normalized(extracted.operation_text()), "query Q { ...F }");
}
