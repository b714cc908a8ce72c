//! All traits related to chunked iterators.
pub(crate) mod chunked_iterator;
