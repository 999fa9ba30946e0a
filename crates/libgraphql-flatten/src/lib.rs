//! A library for flattening GraphQL query documents by inlining fragments.
//!
//! Given a query document containing fragment definitions and fragment
//! spreads, this crate produces an equivalent fragment-free document: every
//! spread is textually replaced with the referenced fragment's selection-set
//! contents (transitively, so fragments that spread other fragments are fully
//! expanded), and the now-orphaned fragment definitions are discarded.
//!
//! The crate deliberately does *not* validate GraphQL semantics, execute
//! queries, or re-format output. It understands just enough of the grammar to
//! locate fragment definitions, fragment spreads, and `__typename` fields —
//! pretty-printing the result is left to an external formatter.
//!
//! The main entry point is [`flatten`]:
//!
//! ```rust
//! use libgraphql_flatten::{flatten, FlattenOptions};
//!
//! let document = "
//!     query Q { ...UserFields }
//!     fragment UserFields on User { id name }
//! ";
//! let flattened = flatten(document, &FlattenOptions::default()).unwrap();
//! assert!(!flattened.contains("fragment"));
//! ```

mod byte_span;
mod document_scanner;
mod extracted_document;
mod flatten;
mod flatten_error;
mod flatten_options;
mod fragment_definition;
mod fragment_extractor;
mod fragment_inliner;
mod fragment_spread;
mod source_position;
mod typename_stripper;

pub use byte_span::ByteSpan;
pub use document_scanner::DocumentScanner;
pub use extracted_document::ExtractedDocument;
pub use flatten::flatten;
pub use flatten_error::FlattenError;
pub use flatten_options::FlattenOptions;
pub use fragment_definition::FragmentDefinition;
pub use fragment_extractor::FragmentExtractor;
pub use fragment_inliner::FragmentInliner;
pub use fragment_spread::find_spreads;
pub use fragment_spread::FragmentSpread;
pub use source_position::SourcePosition;
pub use typename_stripper::strip_typename;

#[cfg(test)]
mod tests;
