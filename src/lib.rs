//! This crate cuts iterators into consecutive fixed-size chunks.
//!
//! Chunks come in two flavours:
//! - lazy chunks (`ChunkedIterator::chunked`), iterators reading straight
//!   from the source without buffering anything;
//! - eager groups (`ChunkedIterator::collect_groups`), fully realized vectors.
//!
//! ```
//! use lazy_chunks::prelude::*;
//! for (index, chunk) in (0u32..).chunked(4).unwrap().take(3).enumerate() {
//!     let values: Vec<u32> = chunk.collect();
//!     assert_eq!(values[0], 4 * index as u32);
//!     assert_eq!(values.len(), 4);
//! }
//! ```
#![warn(clippy::all)]
#![deny(missing_docs)]

/// Errors and result type.
pub mod errors;
pub use errors::{Error, Result};
/// Folder trait and eager groupings.
pub mod folders;
pub use folders::{Folder, Grouping, Groups};
/// Lazy chunked iterators.
pub mod iter;
pub use iter::{Chunk, Chunked, ChunkedIterator};
/// Import all traits in prelude to enable chunked iterators.
pub mod prelude;
mod size;
pub use size::ChunkSize;

pub(crate) mod utils;
