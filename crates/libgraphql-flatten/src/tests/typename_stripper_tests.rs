//! Tests for the post-inlining `__typename` removal pass.

use crate::strip_typename;
use crate::tests::utils::normalized;
use crate::FlattenError;

/// Verifies that a bare `__typename` field is removed from a selection
/// set.
#[test]
fn strips_bare_typename() {
    let stripped = strip_typename("{ field { __typename id } }").unwrap();
    assert_eq!(normalized(&stripped), "{ field { id } }");
}

/// Verifies that every occurrence is removed, not just the first.
#[test]
fn strips_all_occurrences() {
    let stripped =
        strip_typename("{ a { __typename x } b { __typename y } __typename c }").unwrap();
    assert_eq!(normalized(&stripped), "{ a { x } b { y } c }");
}

/// Verifies that an aliased `__typename` value is preserved: the alias
/// names a field the caller asked for.
#[test]
fn keeps_aliased_typename_value() {
    let text = "{ kind: __typename id }";
    let stripped = strip_typename(text).unwrap();
    assert_eq!(normalized(&stripped), normalized(text));
}

/// Verifies that `__typename` used as an alias name is preserved.
#[test]
fn keeps_typename_used_as_alias() {
    let text = "{ __typename: id other }";
    let stripped = strip_typename(text).unwrap();
    assert_eq!(normalized(&stripped), normalized(text));
}

/// Verifies that `__typename` inside a string argument is content and is
/// preserved.
#[test]
fn keeps_typename_inside_string_literal() {
    let text = "{ field(name: \"__typename\") }";
    let stripped = strip_typename(text).unwrap();
    assert_eq!(normalized(&stripped), normalized(text));
}

/// Verifies that directives on a stripped `__typename` are removed with
/// the field rather than left dangling in the selection set.
#[test]
fn strips_directives_with_the_field() {
    let stripped =
        strip_typename("{ field { __typename @include(if: true) id } }").unwrap();
    assert!(!stripped.contains("@include"));
    assert_eq!(normalized(&stripped), "{ field { id } }");
}

/// Verifies that a run of several directives — with and without argument
/// groups — is removed along with the field they modify.
#[test]
fn strips_multiple_directives_with_the_field() {
    let stripped = strip_typename("{ a { __typename @skip(if: $a) @custom x } }").unwrap();
    assert_eq!(normalized(&stripped), "{ a { x } }");
}

/// Verifies that removing a directive-carrying `__typename` that was the
/// only field still flags the emptied selection set.
#[test]
fn emptied_selection_set_behind_directive_is_an_error() {
    let error = strip_typename("{ f { __typename @include(if: true) } }").unwrap_err();
    assert!(matches!(error, FlattenError::EmptySelectionSet { .. }));
}

/// Verifies that emptying a selection set is flagged as an error rather
/// than silently emitting `{ }`.
#[test]
fn emptied_selection_set_is_an_error() {
    let error = strip_typename("{ field { __typename } }").unwrap_err();
    assert!(matches!(error, FlattenError::EmptySelectionSet { .. }));
}

/// Verifies that text without any `__typename` passes through unchanged.
#[test]
fn no_typename_is_a_no_op() {
    let text = "{ a { b } }";
    assert_eq!(strip_typename(text).unwrap(), text);
}
