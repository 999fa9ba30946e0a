use crate::SourcePosition;

/// The error type for every fallible operation in this crate.
///
/// All errors are detected eagerly — during extraction or during the
/// fixed-point substitution loop — and abort the run. There is no partial
/// recovery and no partial-output mode.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FlattenError {
    /// The document could not be scanned: unbalanced or mismatched
    /// delimiters, an unterminated string, or a top-level construct that is
    /// neither an operation nor a fragment definition.
    #[error("{position}: {message}")]
    Parse {
        /// Human-readable description of the malformed construct.
        message: String,
        /// Where in the source the problem was detected (0-based
        /// internally, rendered 1-based).
        position: SourcePosition,
    },

    /// Two fragment definitions share a name.
    ///
    /// Fragment names must be unique within a document; keeping either
    /// definition silently would make substitution ambiguous.
    #[error("duplicate fragment definition: `{name}`")]
    DuplicateFragment {
        /// The name both definitions carry.
        name: String,
    },

    /// A spread references a fragment name with no matching definition.
    ///
    /// The spread is neither left in place nor silently removed.
    #[error("spread references unknown fragment: `{name}`")]
    UnknownFragment {
        /// The referenced name that has no definition.
        name: String,
    },

    /// Fixed-point substitution did not converge within the iteration
    /// bound, which means the remaining spreads form a reference cycle.
    #[error("unresolvable fragment references (likely a cycle): {}", .names.join(", "))]
    UnresolvedSpreads {
        /// Names of the fragments still referenced when the bound was hit,
        /// in order of first occurrence.
        names: Vec<String>,
    },

    /// Stripping `__typename` left a selection set with no fields.
    ///
    /// Emitting `{ }` would be invalid GraphQL, so the condition is
    /// reported instead.
    #[error("{position}: selection set is empty after removing `__typename`")]
    EmptySelectionSet {
        /// Position of the `{` opening the now-empty selection set.
        position: SourcePosition,
    },
}
