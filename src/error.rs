//! Error taxonomy for the simulation core
//!
//! Every core error is an unrecoverable precondition violation; callers
//! propagate with `?` and the binary reports at the top level.

use thiserror::Error;

/// Result alias used throughout the core modules.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the catalog, engine and statistics modules.
#[derive(Debug, Error)]
pub enum Error {
    /// The catalog ended up with zero distinct songs after loading.
    #[error("catalog contains no songs")]
    EmptyCatalog,

    /// An index fell outside the catalog range. Indicates an engine bug.
    #[error("song index {index} out of bounds for catalog of {len} songs")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Statistics were requested over a counter with no entries.
    #[error("play counter has no entries")]
    EmptyCounter,

    /// A trial count of zero reached the engine or the average computation.
    #[error("trial count must be at least 1")]
    ZeroTrials,

    /// A catalog line did not have the expected number of fields.
    #[error("malformed catalog line {line_no}: {line:?}")]
    MalformedLine { line_no: usize, line: String },

    /// Catalog file could not be read.
    #[error("failed to read catalog file")]
    Io(#[from] std::io::Error),
}
