//! Small arithmetic helpers.

/// Number of chunks of `size` elements needed to hold `len` elements.
/// `size` must not be zero.
pub(crate) fn chunks_needed(len: usize, size: usize) -> usize {
    len / size + (len % size != 0) as usize
}
