use crate::FragmentDefinition;
use indexmap::IndexMap;

/// The result of splitting a document into its operation content and its
/// fragment definitions.
///
/// The fragment map preserves definition order (fragments are substituted
/// and reported in the order they appear in the source), keyed by fragment
/// name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExtractedDocument<'src> {
    operation_text: String,
    fragments: IndexMap<String, FragmentDefinition<'src>>,
}

impl<'src> ExtractedDocument<'src> {
    pub(crate) fn new(
        operation_text: String,
        fragments: IndexMap<String, FragmentDefinition<'src>>,
    ) -> Self {
        Self {
            operation_text,
            fragments,
        }
    }

    /// All non-fragment top-level content of the document, concatenated in
    /// original order. May still contain fragment spreads.
    pub fn operation_text(&self) -> &str {
        &self.operation_text
    }

    /// The document's fragment definitions, in definition order.
    pub fn fragments(&self) -> &IndexMap<String, FragmentDefinition<'src>> {
        &self.fragments
    }
}
