//! Validated chunk sizes.
use crate::errors::{Error, Result};
use std::fmt;
use std::num::NonZeroUsize;

/// Number of elements per chunk. Always strictly positive.
///
/// Every primitive integer converts into a `ChunkSize` with `TryFrom`,
/// zero and negative values are rejected with `Error::InvalidChunkSize`.
///
/// # Example
///
/// ```
/// use lazy_chunks::ChunkSize;
/// assert_eq!(ChunkSize::new(3).unwrap().get(), 3);
/// assert!(ChunkSize::try_from(-1i32).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChunkSize(NonZeroUsize);

impl ChunkSize {
    /// Validate `size`.
    pub fn new(size: usize) -> Result<Self> {
        NonZeroUsize::new(size)
            .map(ChunkSize)
            .ok_or(Error::InvalidChunkSize(0))
    }
    /// Return the size as a plain integer.
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl From<NonZeroUsize> for ChunkSize {
    fn from(size: NonZeroUsize) -> Self {
        ChunkSize(size)
    }
}

impl From<ChunkSize> for usize {
    fn from(size: ChunkSize) -> Self {
        size.get()
    }
}

impl fmt::Display for ChunkSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

macro_rules! chunk_size_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl TryFrom<$t> for ChunkSize {
                type Error = Error;
                fn try_from(size: $t) -> Result<Self> {
                    // a size not fitting in usize cannot be reached by any chunk anyway
                    ChunkSize::new(usize::try_from(size).unwrap_or(usize::MAX))
                }
            }
        )*
    };
}

macro_rules! chunk_size_from_signed {
    ($($t:ty),*) => {
        $(
            impl TryFrom<$t> for ChunkSize {
                type Error = Error;
                fn try_from(size: $t) -> Result<Self> {
                    if size <= 0 {
                        Err(Error::InvalidChunkSize(i128::from(size)))
                    } else {
                        ChunkSize::new(usize::try_from(size).unwrap_or(usize::MAX))
                    }
                }
            }
        )*
    };
}

chunk_size_from_unsigned!(u8, u16, u32, u64, usize);
chunk_size_from_signed!(i8, i16, i32, i64);

impl TryFrom<isize> for ChunkSize {
    type Error = Error;
    fn try_from(size: isize) -> Result<Self> {
        // isize has no `From` into i128 on every platform, go through i64
        ChunkSize::try_from(size as i64)
    }
}
