use crate::ByteSpan;
use crate::SourcePosition;

/// A single `fragment <Name> on <Type> { … }` definition extracted from a
/// document.
///
/// The `body` is the selection-set text between the definition's outer
/// braces (braces excluded) — exactly the text a spread of this fragment is
/// replaced with. Values borrow from the source text they were extracted
/// from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FragmentDefinition<'src> {
    name: &'src str,
    type_condition: &'src str,
    body: &'src str,
    span: ByteSpan,
    position: SourcePosition,
}

impl<'src> FragmentDefinition<'src> {
    pub(crate) fn new(
        name: &'src str,
        type_condition: &'src str,
        body: &'src str,
        span: ByteSpan,
        position: SourcePosition,
    ) -> Self {
        Self {
            name,
            type_condition,
            body,
            span,
            position,
        }
    }

    /// The fragment's name (unique within a document).
    pub fn name(&self) -> &'src str {
        self.name
    }

    /// The type named by the `on <Type>` clause.
    ///
    /// Not needed for substitution, but part of the definition's header.
    pub fn type_condition(&self) -> &'src str {
        self.type_condition
    }

    /// The selection-set text between the definition's outer braces.
    pub fn body(&self) -> &'src str {
        self.body
    }

    /// The span of the whole definition (header through closing brace) in
    /// the source document.
    pub fn span(&self) -> ByteSpan {
        self.span
    }

    /// The position of the `fragment` keyword in the source document.
    pub fn position(&self) -> SourcePosition {
        self.position
    }
}
