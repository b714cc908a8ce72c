//! Chunked iterators

pub(crate) mod cursor;
mod adaptors;
pub use adaptors::{Chunk, Chunked};
mod traits;
pub use traits::chunked_iterator::ChunkedIterator;
