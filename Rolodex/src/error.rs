//! Error types for `rolodex`

use thiserror::Error;

/// The error type for recent-files operations.
///
/// Most invalid invocations in this crate are silent no-ops; the variants
/// below cover the few places that do fail.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    /// Index-based lookup beyond the end of the list.
    #[error("recent-files index {index} out of range (length {len})")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The list length at the time of the lookup.
        len: usize,
    },

    /// IO error from history store operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error from history store operations.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
