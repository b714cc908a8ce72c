//! Adaptor types for chunked iterators.
mod chunk;
pub use chunk::Chunk;
mod chunked;
pub use chunked::Chunked;
