//! `Chunked` structure for `ChunkedIterator::chunked`.
use crate::iter::cursor::Cursor;
use crate::iter::Chunk;
use crate::ChunkSize;
use std::cell::RefCell;
use std::fmt;
use std::iter::FusedIterator;
use std::rc::Rc;

/// Lazy iterator on consecutive chunks of a source iterator.
/// Obtained from `ChunkedIterator::chunked` or `Chunked::new`.
///
/// Every chunk is a view reading straight from the source, nothing is
/// buffered. Only the last chunk handed out can be read: asking for the next
/// chunk (or calling `has_next`) first discards whatever the live chunk left
/// unread, so each chunk always starts at a multiple of the chunk size.
///
/// # Example
///
/// ```
/// use lazy_chunks::prelude::*;
/// let mut chunks = (1..=5).chunked(2).unwrap();
/// let mut first = chunks.next().unwrap();
/// assert_eq!(first.next(), Some(1));
/// // element 2 is skipped
/// assert_eq!(chunks.next().unwrap().collect::<Vec<_>>(), vec![3, 4]);
/// assert_eq!(chunks.next().unwrap().collect::<Vec<_>>(), vec![5]);
/// assert!(chunks.next().is_none());
/// ```
pub struct Chunked<I: Iterator> {
    pub(crate) cursor: Rc<RefCell<Cursor<I>>>,
}

impl<I: Iterator> Chunked<I> {
    /// Chunk `source` into chunks of `size` elements.
    pub fn new(source: I, size: ChunkSize) -> Self {
        Chunked {
            cursor: Rc::new(RefCell::new(Cursor::new(source, size))),
        }
    }

    /// Return the number of elements per chunk.
    pub fn chunk_size(&self) -> ChunkSize {
        self.cursor.borrow().size()
    }

    /// Return how many chunks were handed out so far.
    pub fn chunks_produced(&self) -> usize {
        self.cursor.borrow().generation()
    }

    /// Tell if another chunk is available.
    ///
    /// This closes the live chunk (its unread elements are discarded) and
    /// looks one element ahead in the source. Calling it again without
    /// advancing consumes nothing more.
    pub fn has_next(&self) -> bool {
        self.cursor.borrow_mut().has_next()
    }
}

impl<I: Iterator> Iterator for Chunked<I> {
    type Item = Chunk<I>;
    fn next(&mut self) -> Option<Self::Item> {
        let generation = self.cursor.borrow_mut().open_chunk()?;
        Some(Chunk {
            cursor: Rc::downgrade(&self.cursor),
            generation,
        })
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cursor.borrow().chunks_hint()
    }
}

impl<I: Iterator> FusedIterator for Chunked<I> {}

impl<I: Iterator> fmt::Debug for Chunked<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cursor = self.cursor.borrow();
        f.debug_struct("Chunked")
            .field("chunk_size", &cursor.size())
            .field("chunks_produced", &cursor.generation())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn counts_produced_chunks() {
        let mut chunks = (0..10).chunked(4).unwrap();
        assert_eq!(chunks.chunk_size().get(), 4);
        assert_eq!(chunks.chunks_produced(), 0);
        chunks.next();
        chunks.next();
        assert_eq!(chunks.chunks_produced(), 2);
        chunks.next();
        assert!(chunks.next().is_none());
        assert_eq!(chunks.chunks_produced(), 3);
    }

    #[test]
    fn size_hint_is_exact_on_exact_sources() {
        let mut chunks = (0..10).chunked(4).unwrap();
        assert_eq!(chunks.size_hint(), (3, Some(3)));
        let mut first = chunks.next().unwrap();
        first.next();
        assert_eq!(chunks.size_hint(), (2, Some(2)));
        assert_eq!(chunks.count(), 2);
    }

    #[test]
    fn unbounded_sources_have_no_upper_hint() {
        let chunks = (0u64..).chunked(8).unwrap();
        assert_eq!(chunks.size_hint().1, None);
    }

    #[test]
    fn debug_shows_progress() {
        let mut chunks = (0..3).chunked(2).unwrap();
        chunks.next();
        assert_eq!(
            format!("{:?}", chunks),
            "Chunked { chunk_size: ChunkSize(2), chunks_produced: 1 }"
        );
    }
}
