/// Configuration for a [`flatten`](crate::flatten) run.
///
/// Options are threaded explicitly through the pipeline rather than held in
/// any global state.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FlattenOptions {
    /// When `true`, every bare `__typename` field is removed from the
    /// flattened result.
    ///
    /// The stripping pass runs only after inlining has reached its fixed
    /// point. Note that `__typename` is required by some GraphQL clients
    /// (e.g. Apollo), so this is off by default.
    pub strip_typename: bool,
}
