//! Errors raised by the chunking adaptors.
use std::convert::Infallible;

use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while chunking.
///
/// Failures of the underlying source are not represented here: a source
/// yielding `Result` items keeps yielding them untouched through its chunks.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Chunk sizes must be strictly positive.
    #[error("invalid chunk size {0}: chunks must hold at least one element")]
    InvalidChunkSize(i128),
    /// Two eager groupings cannot be combined.
    #[error("merging two groupings is not supported: grouping depends on absolute positions")]
    UnsupportedMerge,
    /// A chunk was read after the outer iterator moved past it.
    #[error("chunk {chunk} is stale (live chunk: {current:?})")]
    StaleChunk {
        /// Index of the chunk that was read.
        chunk: usize,
        /// Index of the live chunk, `None` once the adaptor is gone.
        current: Option<usize>,
    },
}

impl From<Infallible> for Error {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
