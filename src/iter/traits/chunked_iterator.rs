//! `ChunkedIterator` extension trait.
use crate::errors::{Error, Result};
use crate::folders::{Folder, Grouping, Groups};
use crate::iter::Chunked;
use crate::ChunkSize;

/// Chunking methods, available on all iterators once the prelude is imported.
pub trait ChunkedIterator: Iterator + Sized {
    /// Lazily cut the iterator into chunks of `size` elements, the last one
    /// possibly shorter. `size` is any integer or a `ChunkSize`; zero and
    /// negative sizes are rejected.
    ///
    /// Example:
    ///
    /// ```
    /// use lazy_chunks::prelude::*;
    /// let chunks: Vec<Vec<u32>> = (1..=7)
    ///     .chunked(3)
    ///     .unwrap()
    ///     .map(|chunk| chunk.collect())
    ///     .collect();
    /// assert_eq!(chunks, vec![vec![1, 2, 3], vec![4, 5, 6], vec![7]]);
    /// assert!((1..=7).chunked(0).is_err());
    /// ```
    fn chunked<S>(self, size: S) -> Result<Chunked<Self>>
    where
        S: TryInto<ChunkSize>,
        Error: From<S::Error>,
    {
        let size = size.try_into()?;
        Ok(Chunked::new(self, size))
    }

    /// Feed all items to the given folder, sequentially.
    fn fold_with<F>(self, folder: &F) -> F::Output
    where
        F: Folder<Item = Self::Item>,
    {
        self.fold(folder.identity(), |output, item| folder.fold(output, item))
    }

    /// Eagerly collect all items into groups of `size` elements.
    fn collect_groups<S>(self, size: S) -> Result<Groups<Self::Item>>
    where
        S: TryInto<ChunkSize>,
        Error: From<S::Error>,
    {
        let grouping = Grouping::new(size.try_into()?);
        Ok(self.fold_with(&grouping))
    }
}

impl<I: Iterator> ChunkedIterator for I {}
