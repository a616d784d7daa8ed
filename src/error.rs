//! Error types for sqlbind

use thiserror::Error;

/// Result type alias for sqlbind operations
pub type SqlResult<T> = Result<T, SqlError>;

/// Error types for statement construction and rendering.
///
/// Most misuse the source model had to catch at runtime (wrong branch kinds,
/// non-join values in join slots, callbacks with the wrong shape) is ruled
/// out by the type system here; what remains is raised at the point of
/// misuse, never deferred to render time for a validly-constructed tree.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SqlError {
    /// DELETE rendered with an empty filter slot. An unfiltered delete
    /// against a full table is almost always an authoring mistake, so it is
    /// rejected outright rather than rendered.
    #[error("DELETE requires at least one filter clause")]
    UnfilteredDelete,
}
